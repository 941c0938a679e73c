//! TOPSIS Scorer - closeness to the ideal solution.

use serde::{Deserialize, Serialize};

use super::scorer::{check_finite, check_weights};
use super::{CriterionNormalizer, DecisionMatrix, Scorer, ScoringMethod, WeightVector};
use crate::domain::foundation::{DegenerateInputError, RankingError};

/// Score assigned under [`DegeneratePolicy::Neutral`] to an alternative that
/// is as close to the ideal as to the anti-ideal with both distances zero.
pub const NEUTRAL_CLOSENESS: f64 = 0.5;

/// How TOPSIS treats inputs that leave nothing to compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// All-zero columns contribute nothing; zero separation scores 0.5.
    #[default]
    Neutral,
    /// Fail with a `DegenerateInputError`.
    Reject,
}

/// Distances of one alternative from the ideal and anti-ideal solutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

impl Separation {
    /// Relative closeness `to_worst / (to_best + to_worst)`, `None` if both are zero.
    pub fn closeness(&self) -> Option<f64> {
        let total = self.to_best + self.to_worst;
        if total == 0.0 {
            None
        } else {
            Some(self.to_worst / total)
        }
    }
}

/// Ranks alternatives by relative closeness to the ideal solution.
///
/// # Algorithm
/// 1. `n[i][j] = x[i][j] / sqrt(Σ_i x[i][j]²)`
/// 2. `y[i][j] = n[i][j] * w[j]`
/// 3. Ideal best/worst per column: benefit (max, min), cost (min, max)
/// 4. Euclidean distance of each row to both ideal vectors
/// 5. `V[i] = d⁻[i] / (d⁺[i] + d⁻[i])`, in [0, 1], higher is better
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisScorer {
    policy: DegeneratePolicy,
}

impl TopsisScorer {
    /// Creates a TOPSIS scorer with the neutral degenerate policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a TOPSIS scorer with the given degenerate policy.
    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }

    /// Returns the degenerate policy.
    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// Weighted normalized matrix, stored column-major.
    fn weighted_columns(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<Vec<f64>>, RankingError> {
        (0..matrix.criterion_count())
            .map(|j| {
                let column = matrix.column(j);
                let normalized = match CriterionNormalizer::euclidean(&column) {
                    Some(normalized) => normalized,
                    None => match self.policy {
                        DegeneratePolicy::Neutral => vec![0.0; column.len()],
                        DegeneratePolicy::Reject => {
                            return Err(DegenerateInputError::ZeroColumnNorm(
                                matrix.criterion_name(j),
                            )
                            .into())
                        }
                    },
                };
                let weight = weights.as_slice()[j];
                let weighted: Vec<f64> = normalized.into_iter().map(|n| n * weight).collect();
                Ok(weighted)
            })
            .collect()
    }

    /// Computes each alternative's separation from the ideal solutions.
    pub fn separations(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<Separation>, RankingError> {
        check_weights(matrix, weights)?;

        let columns = self.weighted_columns(matrix, weights)?;
        let ideals: Vec<(f64, f64)> = columns
            .iter()
            .zip(matrix.kinds())
            .map(|(column, kind)| CriterionNormalizer::ideal_pair(column, kind))
            .collect();

        let separations = (0..matrix.alternative_count())
            .map(|i| {
                let (mut best_sq, mut worst_sq) = (0.0, 0.0);
                for (column, (best, worst)) in columns.iter().zip(&ideals) {
                    best_sq += (column[i] - best).powi(2);
                    worst_sq += (column[i] - worst).powi(2);
                }
                Separation {
                    to_best: best_sq.sqrt(),
                    to_worst: worst_sq.sqrt(),
                }
            })
            .collect();

        Ok(separations)
    }
}

impl Scorer for TopsisScorer {
    fn method(&self) -> ScoringMethod {
        ScoringMethod::Topsis
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<f64>, RankingError> {
        let separations = self.separations(matrix, weights)?;

        let scores = separations
            .iter()
            .zip(matrix.alternatives())
            .map(|(separation, alt)| match separation.closeness() {
                Some(closeness) => Ok(closeness),
                None => match self.policy {
                    DegeneratePolicy::Neutral => Ok(NEUTRAL_CLOSENESS),
                    DegeneratePolicy::Reject => {
                        Err(DegenerateInputError::ZeroSeparation(alt.id.clone()).into())
                    }
                },
            })
            .collect::<Result<Vec<f64>, RankingError>>()?;

        check_finite(self.method(), matrix, &scores)?;
        Ok(scores)
    }
}
