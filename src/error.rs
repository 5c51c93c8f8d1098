// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("Missing required column `{column}` in table `{table}`")]
    Schema { table: String, column: String },

    #[error("Invalid range: start `{start}` is after end `{end}`")]
    InvalidRange { start: String, end: String },

    #[error("Insufficient data for {operation}: {reason}")]
    InsufficientData { operation: String, reason: String },

    #[error("CSV error in table `{table}`: {source}")]
    CsvParse {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyticsError {
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    pub fn schema(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Schema {
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn insufficient_data(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}
