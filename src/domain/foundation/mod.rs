//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the ranking domain.

mod alternative;
mod criterion;
mod errors;
mod ids;
mod timestamp;

pub use alternative::Alternative;
pub use criterion::{CriteriaSet, Criterion, CriterionType};
pub use errors::{
    ConfigurationError, DegenerateInputError, ErrorCode, RankingError, ValidationError,
};
pub use ids::RunId;
pub use timestamp::Timestamp;
