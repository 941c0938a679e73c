//! Weight vector consumed by every scoring method.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Tolerance for the sum-to-one invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Non-negative criterion weights summing to 1, in criterion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting negative or non-finite entries and
    /// sums that stray from 1 by more than [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        let valid_entries = !weights.is_empty()
            && weights.iter().all(|w| w.is_finite() && *w >= 0.0);
        let sum: f64 = weights.iter().sum();

        if !valid_entries || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::InvalidWeights(weights));
        }

        Ok(Self(weights))
    }

    /// Equal weights for `n` criteria.
    pub fn equal(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n])
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the weight at a criterion index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<'de> Deserialize<'de> for WeightVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let weights = Vec::<f64>::deserialize(deserializer)?;
        WeightVector::new(weights).map_err(serde::de::Error::custom)
    }
}
