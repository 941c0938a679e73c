//! Scorer trait and the identifiers of the available scoring methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DecisionMatrix, WeightVector};
use crate::domain::foundation::{ConfigurationError, RankingError, ValidationError};

/// The ranking methods that can score a decision matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Simple Additive Weighting.
    Saw,
    /// Weighted Product.
    Wp,
    /// Technique for Order Preference by Similarity to Ideal Solution.
    Topsis,
}

impl ScoringMethod {
    /// All methods in output column order.
    pub const ALL: [ScoringMethod; 3] = [ScoringMethod::Saw, ScoringMethod::Wp, ScoringMethod::Topsis];

    /// Returns the short display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoringMethod::Saw => "SAW",
            ScoringMethod::Wp => "WP",
            ScoringMethod::Topsis => "TOPSIS",
        }
    }

    /// Returns the output table column name.
    pub fn column_name(&self) -> &'static str {
        match self {
            ScoringMethod::Saw => "SAW_Score",
            ScoringMethod::Wp => "WP_Score",
            ScoringMethod::Topsis => "TOPSIS_Score",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "saw" => Ok(ScoringMethod::Saw),
            "wp" => Ok(ScoringMethod::Wp),
            "topsis" => Ok(ScoringMethod::Topsis),
            other => Err(format!("unknown scoring method '{}'", other)),
        }
    }
}

/// A ranking method mapping (values, weights, criterion types) to one score
/// per alternative.
///
/// # Contract
///
/// Implementations must:
/// - Return exactly one score per alternative, in input order
/// - Treat their inputs as read-only
/// - Never return NaN or infinite scores; fail with a typed error instead
pub trait Scorer: Send + Sync {
    /// Which method this scorer implements.
    fn method(&self) -> ScoringMethod;

    /// Scores every alternative of the matrix.
    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<f64>, RankingError>;
}

/// Checks that there is one weight per criterion.
pub(crate) fn check_weights(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
) -> Result<(), ConfigurationError> {
    if weights.len() != matrix.criterion_count() {
        return Err(ConfigurationError::CriterionCountMismatch {
            expected: matrix.criterion_count(),
            actual: weights.len(),
        });
    }
    Ok(())
}

/// Rejects score vectors containing NaN or infinity.
pub(crate) fn check_finite(
    method: ScoringMethod,
    matrix: &DecisionMatrix,
    scores: &[f64],
) -> Result<(), ValidationError> {
    match scores.iter().position(|s| !s.is_finite()) {
        Some(i) => Err(ValidationError::NonFiniteScore {
            method: method.label().to_string(),
            alternative: matrix
                .alternatives()
                .get(i)
                .map(|alt| alt.id.clone())
                .unwrap_or_default(),
        }),
        None => Ok(()),
    }
}
