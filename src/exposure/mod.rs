//! Exposure records and compromised field categories.

pub mod field;
pub mod record;

pub use field::DataField;
pub use record::{BASELINE_FIELD, ExposureRecord, normalize_email, split_fields};
