//! SAW Scorer - Simple Additive Weighting.

use super::scorer::{check_finite, check_weights};
use super::{CriterionNormalizer, DecisionMatrix, Scorer, ScoringMethod, WeightVector};
use crate::domain::foundation::RankingError;

/// Weighted sum of ratio-normalized criterion values.
///
/// # Algorithm
/// - benefit: `r[i][j] = x[i][j] / max_i(x[:, j])`
/// - cost: `r[i][j] = min_i(x[:, j]) / x[i][j]`
/// - `score[i] = Σ_j r[i][j] * w[j]`
///
/// # Edge Cases
/// - Benefit column whose maximum is zero: `ValidationError::ZeroDivision`
/// - Cost column containing a zero: `ValidationError::ZeroDivision`
#[derive(Debug, Clone, Copy, Default)]
pub struct SawScorer;

impl SawScorer {
    /// Creates a SAW scorer.
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for SawScorer {
    fn method(&self) -> ScoringMethod {
        ScoringMethod::Saw
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<f64>, RankingError> {
        check_weights(matrix, weights)?;

        let mut scores = vec![0.0; matrix.alternative_count()];
        for (j, kind) in matrix.kinds().into_iter().enumerate() {
            let normalized =
                CriterionNormalizer::ratio(&matrix.column(j), kind, &matrix.criterion_name(j))?;
            let weight = weights.as_slice()[j];
            for (score, r) in scores.iter_mut().zip(normalized) {
                *score += r * weight;
            }
        }

        check_finite(self.method(), matrix, &scores)?;
        Ok(scores)
    }
}
