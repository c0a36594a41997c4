use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {path}")]
    CsvError {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset {path} is missing expected columns: {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    #[error("No filter criteria: supply a target domain and/or at least one target email")]
    NoFilterCriteria,

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
