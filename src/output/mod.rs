//! Output layer.
//!
//! - `formatter`: picks the terminal, JSON or Markdown reporter for stdout
//! - `writer`: writes the CSV, JSON and Markdown report files to a directory

pub mod formatter;
pub mod writer;

pub use formatter::OutputFormatter;
pub use writer::{CSV_FILE, JSON_FILE, MARKDOWN_FILE, WrittenFiles, write_outputs};
