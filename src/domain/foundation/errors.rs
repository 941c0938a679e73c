//! Error types for the domain layer.
//!
//! Failures are grouped by the kind of mistake that produced them:
//!
//! - [`ConfigurationError`] - the criteria setup or comparison matrix shape is wrong
//! - [`ValidationError`] - a numeric precondition of a method is violated
//! - [`DegenerateInputError`] - the data leaves a method with nothing to compute
//!
//! [`RankingError`] unifies them for callers that run several stages.

use std::fmt;
use thiserror::Error;

/// Errors in the fixed criteria configuration or the judgment matrix shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("At least one criterion must be configured")]
    EmptyCriteria,

    #[error("Criterion '{0}' is configured more than once")]
    DuplicateCriterion(String),

    #[error("Expected {expected} criterion types, got {actual}")]
    CriterionCountMismatch { expected: usize, actual: usize },

    #[error("Comparison matrix row {row} has {actual} entries, expected {expected}")]
    MatrixNotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Comparison matrix is {actual}x{actual} but {expected} criteria are configured")]
    MatrixSizeMismatch { expected: usize, actual: usize },

    #[error("Criterion '{0}' has no matching column in the input table")]
    UnboundCriterion(String),

    #[error("No Random Index is known for a {0}x{0} comparison matrix")]
    RandomIndexUnavailable(usize),
}

/// Violations of a numeric precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Comparison matrix entry ({row}, {col}) must be positive and finite, got {value}")]
    NonPositiveComparison { row: usize, col: usize, value: f64 },

    #[error("Alternative '{alternative}' has a non-finite value for '{criterion}'")]
    NonFiniteValue {
        alternative: String,
        criterion: String,
    },

    #[error("Alternative '{alternative}' has {actual} criterion values, expected {expected}")]
    RowWidthMismatch {
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("At least one alternative is required")]
    EmptyAlternatives,

    #[error("{actual} alternatives exceed the configured limit of {limit}")]
    TooManyAlternatives { limit: usize, actual: usize },

    #[error("Weighted Product requires positive values, '{alternative}' has {value} for '{criterion}'")]
    NonPositiveValue {
        alternative: String,
        criterion: String,
        value: f64,
    },

    #[error("Normalizing '{criterion}' would divide by zero: {reason}")]
    ZeroDivision { criterion: String, reason: String },

    #[error("Weight vector must be non-negative and sum to 1, got {0:?}")]
    InvalidWeights(Vec<f64>),

    #[error("{method} produced a non-finite score for '{alternative}'")]
    NonFiniteScore { method: String, alternative: String },

    #[error("{method} returned {actual} scores for {expected} alternatives")]
    ScoreCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates a zero division error for a criterion.
    pub fn zero_division(criterion: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::ZeroDivision {
            criterion: criterion.into(),
            reason: reason.into(),
        }
    }
}

/// Inputs that leave a method without a meaningful answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegenerateInputError {
    #[error("Criterion '{0}' is zero for every alternative")]
    ZeroColumnNorm(String),

    #[error("Alternative '{0}' is equally far from the ideal and anti-ideal solutions")]
    ZeroSeparation(String),
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigurationInvalid,
    ValidationFailed,
    DegenerateInput,
    InconsistentJudgments,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ConfigurationInvalid => "CONFIGURATION_INVALID",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            ErrorCode::InconsistentJudgments => "INCONSISTENT_JUDGMENTS",
        };
        write!(f, "{}", s)
    }
}

/// Any failure raised while deriving weights or scoring alternatives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("[CONFIGURATION_INVALID] {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("[VALIDATION_FAILED] {0}")]
    Validation(#[from] ValidationError),

    #[error("[DEGENERATE_INPUT] {0}")]
    Degenerate(#[from] DegenerateInputError),

    #[error("[INCONSISTENT_JUDGMENTS] Consistency ratio {ratio:.4} is not below {threshold}")]
    Inconsistent { ratio: f64, threshold: f64 },
}

impl RankingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::Configuration(_) => ErrorCode::ConfigurationInvalid,
            RankingError::Validation(_) => ErrorCode::ValidationFailed,
            RankingError::Degenerate(_) => ErrorCode::DegenerateInput,
            RankingError::Inconsistent { .. } => ErrorCode::InconsistentJudgments,
        }
    }
}
