//! Errors raised by table sources and exporters.

use thiserror::Error;

use crate::domain::foundation::ConfigurationError;

/// Failures at the tabular I/O boundary.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' is missing from the input table")]
    MissingColumn(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Row {row}: '{value}' in column '{column}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Serialization(err.to_string())
    }
}
