//! Criterion Normalizer - benefit/cost transforms shared by the scorers.

use crate::domain::foundation::{CriterionType, ValidationError};

/// Column-wise normalization helpers.
pub struct CriterionNormalizer;

impl CriterionNormalizer {
    /// Largest value of a column. Negative infinity for an empty column.
    pub fn column_max(column: &[f64]) -> f64 {
        column.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value of a column. Positive infinity for an empty column.
    pub fn column_min(column: &[f64]) -> f64 {
        column.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Ratio normalization used by SAW.
    ///
    /// - benefit: `x / max(column)`
    /// - cost: `min(column) / x`
    ///
    /// # Errors
    /// - `ValidationError::ZeroDivision` if a benefit column has a zero maximum
    ///   or a cost column contains a zero
    pub fn ratio(
        column: &[f64],
        kind: CriterionType,
        criterion: &str,
    ) -> Result<Vec<f64>, ValidationError> {
        match kind {
            CriterionType::Benefit => {
                let max = Self::column_max(column);
                if max == 0.0 {
                    return Err(ValidationError::zero_division(
                        criterion,
                        "benefit column maximum is zero",
                    ));
                }
                Ok(column.iter().map(|x| x / max).collect())
            }
            CriterionType::Cost => {
                if column.iter().any(|x| *x == 0.0) {
                    return Err(ValidationError::zero_division(
                        criterion,
                        "cost column contains a zero value",
                    ));
                }
                let min = Self::column_min(column);
                Ok(column.iter().map(|x| min / x).collect())
            }
        }
    }

    /// Vector normalization used by TOPSIS: `x / sqrt(Σ x²)`.
    ///
    /// The norm is accumulated with `hypot` so finite columns near `f64::MAX`
    /// do not overflow to infinity. Returns `None` when the norm is zero.
    pub fn euclidean(column: &[f64]) -> Option<Vec<f64>> {
        let norm = column.iter().fold(0.0_f64, |acc, x| acc.hypot(*x));
        if norm == 0.0 {
            return None;
        }
        Some(column.iter().map(|x| x / norm).collect())
    }

    /// Exponent applied by WP: `+w` for benefit, `-w` for cost.
    pub fn signed_exponent(weight: f64, kind: CriterionType) -> f64 {
        match kind {
            CriterionType::Benefit => weight,
            CriterionType::Cost => -weight,
        }
    }

    /// Ideal best and worst values of a column: `(best, worst)`.
    pub fn ideal_pair(column: &[f64], kind: CriterionType) -> (f64, f64) {
        let max = Self::column_max(column);
        let min = Self::column_min(column);
        match kind {
            CriterionType::Benefit => (max, min),
            CriterionType::Cost => (min, max),
        }
    }
}
