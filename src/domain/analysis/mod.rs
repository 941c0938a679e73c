//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that operate on domain objects
//! to derive criterion weights and score alternatives.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Pairwise importance judgments between criteria
//! - `WeightDeriver` - AHP priority weights and consistency ratio
//! - `DecisionMatrix` - Alternatives x criteria table of raw values
//! - `CriterionNormalizer` - Benefit/cost transforms shared by the scorers
//! - `SawScorer`, `WpScorer`, `TopsisScorer` - The three ranking methods
//! - `RankingTable` - Alternatives with attached scores, sorted by one method
//! - `RankingReport` - Weights, consistency and ranking of one run
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod comparison_matrix;
mod decision_matrix;
mod normalizer;
mod ranking_report;
mod ranking_table;
mod saw_scorer;
mod scorer;
mod topsis_scorer;
mod weight_deriver;
mod weights;
mod wp_scorer;

// Re-export all public types
pub use comparison_matrix::ComparisonMatrix;
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use normalizer::CriterionNormalizer;
pub use ranking_report::RankingReport;
pub use ranking_table::{RankedAlternative, RankingTable, ScoreColumns, ScoreSet};
pub use saw_scorer::SawScorer;
pub use scorer::{Scorer, ScoringMethod};
pub use topsis_scorer::{DegeneratePolicy, Separation, TopsisScorer, NEUTRAL_CLOSENESS};
pub use weight_deriver::{
    ConsistencyPolicy, ConsistencyReport, DerivedWeights, RandomIndexTable, WeightDeriver, CONSISTENCY_THRESHOLD,
};
pub use weights::{WeightVector, WEIGHT_SUM_TOLERANCE};
pub use wp_scorer::WpScorer;
