//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Configuration could not be rendered: {0}")]
    RenderError(#[from] serde_yaml::Error),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("At least one criterion must be configured")]
    NoCriteria,

    #[error("Comparison matrix has {rows} rows but {criteria} criteria are configured")]
    MatrixSizeMismatch { criteria: usize, rows: usize },

    #[error("Invalid comparison matrix: {0}")]
    InvalidComparisonMatrix(String),

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Consistency threshold must be positive")]
    InvalidThreshold,

    #[error("Maximum alternatives must be at least 1")]
    InvalidMaxAlternatives,

    #[error("Display limit must be at least 1")]
    InvalidDisplayLimit,

    #[error("Identity column name cannot be empty: {0}")]
    EmptyColumnName(&'static str),

    #[error("CSV delimiter must be a single ASCII character")]
    InvalidDelimiter,

    #[error("Log level cannot be empty")]
    EmptyLogLevel,
}
