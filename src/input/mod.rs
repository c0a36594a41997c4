//! Input layer: breach datasets and target email lists.

pub mod source;
pub mod targets;

pub use source::{
    PASSWORD_HASH_COLUMN, REQUIRED_COLUMNS, load_dataset, load_records, parse_breach_date,
    parse_password_flag,
};
pub use targets::{parse_email_list, read_emails_file};
