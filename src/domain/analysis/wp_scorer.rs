//! WP Scorer - Weighted Product.

use super::scorer::{check_finite, check_weights};
use super::{CriterionNormalizer, DecisionMatrix, Scorer, ScoringMethod, WeightVector};
use crate::domain::foundation::{RankingError, ValidationError};

/// Product of values raised to signed weights, normalized to shares.
///
/// # Algorithm
/// - `S[i] = Π_j x[i][j] ^ e[j]` where `e[j] = w[j]` for benefit and `-w[j]` for cost
/// - `V[i] = S[i] / Σ_k S[k]`
///
/// The preference vector `V` sums to 1.
///
/// # Preconditions
/// Every value must be strictly positive; zero raised to a negative exponent
/// is infinite. Violations fail with `ValidationError::NonPositiveValue`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WpScorer;

impl WpScorer {
    /// Creates a WP scorer.
    pub fn new() -> Self {
        Self
    }

    /// Computes the unnormalized vector S.
    pub fn s_vector(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<f64>, RankingError> {
        check_weights(matrix, weights)?;

        let exponents: Vec<f64> = matrix
            .kinds()
            .into_iter()
            .zip(weights.as_slice())
            .map(|(kind, w)| CriterionNormalizer::signed_exponent(*w, kind))
            .collect();

        matrix
            .alternatives()
            .iter()
            .map(|alt| {
                let mut product = 1.0;
                for (j, (value, exponent)) in alt.values.iter().zip(&exponents).enumerate() {
                    if *value <= 0.0 {
                        return Err(ValidationError::NonPositiveValue {
                            alternative: alt.id.clone(),
                            criterion: matrix.criterion_name(j),
                            value: *value,
                        }
                        .into());
                    }
                    product *= value.powf(*exponent);
                }
                Ok(product)
            })
            .collect()
    }
}

impl Scorer for WpScorer {
    fn method(&self) -> ScoringMethod {
        ScoringMethod::Wp
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<f64>, RankingError> {
        let s = self.s_vector(matrix, weights)?;
        let total: f64 = s.iter().sum();
        let scores: Vec<f64> = s.iter().map(|value| value / total).collect();

        check_finite(self.method(), matrix, &scores)?;
        Ok(scores)
    }
}
