//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `analysis` - Pure domain services for weighting and ranking (AHP, SAW, WP, TOPSIS)

pub mod analysis;
pub mod foundation;
