//! Weight Deriver - AHP priority weights and the consistency check.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, WeightVector};
use crate::domain::foundation::{ConfigurationError, RankingError, ValidationError};

/// Consistency ratios below this value are conventionally accepted.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Saaty's Random Index for matrix sizes 1 through 15.
const SAATY_RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Random Index lookup by matrix size.
///
/// Position `n - 1` holds the average consistency index of random
/// reciprocal matrices of size `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RandomIndexTable(Vec<f64>);

impl RandomIndexTable {
    /// Saaty's published values for N = 1..15.
    pub fn saaty() -> Self {
        Self(SAATY_RANDOM_INDEX.to_vec())
    }

    /// Creates a table from custom values, starting at N = 1.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Largest N covered by the table.
    pub fn max_size(&self) -> usize {
        self.0.len()
    }

    /// Returns the Random Index for an N x N matrix.
    pub fn lookup(&self, n: usize) -> Result<f64, ConfigurationError> {
        n.checked_sub(1)
            .and_then(|i| self.0.get(i))
            .copied()
            .ok_or(ConfigurationError::RandomIndexUnavailable(n))
    }
}

impl Default for RandomIndexTable {
    fn default() -> Self {
        Self::saaty()
    }
}

/// Outcome of the AHP consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub threshold: f64,
}

impl ConsistencyReport {
    /// True when the ratio is below the threshold and the weights are usable.
    pub fn is_consistent(&self) -> bool {
        self.consistency_ratio < self.threshold
    }

    /// Human readable status for reports.
    pub fn status_label(&self) -> &'static str {
        if self.is_consistent() {
            "consistent"
        } else {
            "inconsistent - revise the comparison matrix"
        }
    }
}

/// What a run does when the judgment matrix fails the consistency check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyPolicy {
    /// Log a warning and keep going with the derived weights.
    #[default]
    Warn,
    /// Stop before any scoring runs.
    Abort,
}

impl ConsistencyPolicy {
    /// Applies the policy to a consistency report.
    ///
    /// # Errors
    /// - `RankingError::Inconsistent` under `Abort` when the ratio is not below the threshold
    pub fn enforce(&self, report: &ConsistencyReport) -> Result<(), RankingError> {
        match self {
            ConsistencyPolicy::Abort if !report.is_consistent() => Err(RankingError::Inconsistent {
                ratio: report.consistency_ratio,
                threshold: report.threshold,
            }),
            _ => Ok(()),
        }
    }
}

/// Weights derived from a comparison matrix together with their consistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedWeights {
    pub weights: WeightVector,
    pub consistency: ConsistencyReport,
}

/// AHP weight extraction.
///
/// # Algorithm
/// 1. Divide every entry by its column sum.
/// 2. Average each row of the normalized matrix to get the priority vector.
/// 3. `lambda_max = mean_i((A · w)[i] / w[i])`, `CI = (lambda_max - N) / (N - 1)`,
///    `CR = CI / RI(N)`.
///
/// The deriver reports consistency; deciding whether an inconsistent matrix
/// aborts a run is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightDeriver {
    random_index: RandomIndexTable,
    threshold: f64,
}

impl WeightDeriver {
    /// Creates a deriver with Saaty's Random Index and the 0.1 threshold.
    pub fn new() -> Self {
        Self {
            random_index: RandomIndexTable::saaty(),
            threshold: CONSISTENCY_THRESHOLD,
        }
    }

    /// Replaces the Random Index table.
    pub fn with_random_index(mut self, table: RandomIndexTable) -> Self {
        self.random_index = table;
        self
    }

    /// Replaces the consistency threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the consistency threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Derives priority weights and their consistency report.
    ///
    /// # Errors
    /// - `ConfigurationError::RandomIndexUnavailable` if N is outside the table
    pub fn derive(&self, matrix: &ComparisonMatrix) -> Result<DerivedWeights, RankingError> {
        let n = matrix.size();
        let column_sums = matrix.column_sums();

        let priorities: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                let normalized_sum: f64 = row
                    .iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .sum();
                normalized_sum / n as f64
            })
            .collect();

        let weights = WeightVector::new(priorities)?;
        let consistency = self.consistency_of(matrix, &weights)?;

        Ok(DerivedWeights {
            weights,
            consistency,
        })
    }

    /// Computes the consistency report of `matrix` against a given weight vector.
    ///
    /// # Errors
    /// - `ConfigurationError::MatrixSizeMismatch` if the weight count differs from N
    /// - `ConfigurationError::RandomIndexUnavailable` if N is outside the table
    /// - `ValidationError::ZeroDivision` if a weight is zero
    ///
    /// # Edge Cases
    /// - N <= 2: the Random Index is 0 and the ratio is reported as 0
    pub fn consistency_of(
        &self,
        matrix: &ComparisonMatrix,
        weights: &WeightVector,
    ) -> Result<ConsistencyReport, RankingError> {
        let n = matrix.size();
        matrix.ensure_size(weights.len())?;
        let random_index = self.random_index.lookup(n)?;

        let weighted = matrix.multiply(weights.as_slice());
        let mut ratio_sum = 0.0;
        for (i, (product, weight)) in weighted.iter().zip(weights.as_slice()).enumerate() {
            if *weight == 0.0 {
                return Err(ValidationError::zero_division(
                    format!("weight {}", i + 1),
                    "lambda_max divides by each weight",
                )
                .into());
            }
            ratio_sum += product / weight;
        }
        let lambda_max = ratio_sum / n as f64;

        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let consistency_ratio = if random_index > 0.0 {
            consistency_index / random_index
        } else {
            0.0
        };

        Ok(ConsistencyReport {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
            threshold: self.threshold,
        })
    }
}

impl Default for WeightDeriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_matrix() -> ComparisonMatrix {
        ComparisonMatrix::new(vec![
            vec![1.0, 2.0, 3.0, 1.0],
            vec![0.5, 1.0, 2.0, 0.5],
            vec![0.33, 0.5, 1.0, 0.33],
            vec![1.0, 2.0, 3.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn reference_matrix_yields_expected_weights() {
        let derived = WeightDeriver::new().derive(&reference_matrix()).unwrap();
        let expected = [0.3509, 0.1893, 0.1088, 0.3509];

        for (actual, expected) in derived.weights.as_slice().iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-4, "{} vs {}", actual, expected);
        }
    }

    #[test]
    fn reference_matrix_is_consistent() {
        let derived = WeightDeriver::new().derive(&reference_matrix()).unwrap();
        let report = derived.consistency;

        assert!((report.lambda_max - 4.004995).abs() < 1e-5);
        assert!((report.consistency_ratio - 0.00185).abs() < 1e-5);
        assert_eq!(report.random_index, 0.90);
        assert!(report.is_consistent());
        assert_eq!(report.status_label(), "consistent");
    }

    #[test]
    fn weights_sum_to_one() {
        let derived = WeightDeriver::new().derive(&reference_matrix()).unwrap();
        assert!((derived.weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identity_matrix_gives_equal_weights_and_zero_ratio() {
        let derived = WeightDeriver::new()
            .derive(&ComparisonMatrix::uniform(5))
            .unwrap();

        for weight in derived.weights.as_slice() {
            assert!((weight - 0.2).abs() < 1e-12);
        }
        assert!(derived.consistency.consistency_ratio.abs() < 1e-12);
    }

    #[test]
    fn inconsistent_matrix_is_flagged() {
        // A > B, B > C, but C > A
        let matrix = ComparisonMatrix::new(vec![
            vec![1.0, 5.0, 1.0 / 5.0],
            vec![1.0 / 5.0, 1.0, 5.0],
            vec![5.0, 1.0 / 5.0, 1.0],
        ])
        .unwrap();

        let derived = WeightDeriver::new().derive(&matrix).unwrap();
        assert!(!derived.consistency.is_consistent());
        assert!(derived.consistency.consistency_ratio >= CONSISTENCY_THRESHOLD);
    }

    #[test]
    fn two_by_two_matrix_has_zero_ratio() {
        let matrix = ComparisonMatrix::new(vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]]).unwrap();
        let derived = WeightDeriver::new().derive(&matrix).unwrap();

        assert!((derived.weights.as_slice()[0] - 0.75).abs() < 1e-12);
        assert_eq!(derived.consistency.consistency_ratio, 0.0);
    }

    #[test]
    fn single_criterion_gets_full_weight() {
        let derived = WeightDeriver::new()
            .derive(&ComparisonMatrix::uniform(1))
            .unwrap();
        assert_eq!(derived.weights.as_slice(), &[1.0]);
        assert_eq!(derived.consistency.consistency_index, 0.0);
    }

    #[test]
    fn oversized_matrix_needs_random_index() {
        let err = WeightDeriver::new()
            .derive(&ComparisonMatrix::uniform(16))
            .unwrap_err();
        assert_eq!(
            err,
            RankingError::Configuration(ConfigurationError::RandomIndexUnavailable(16))
        );
    }

    #[test]
    fn custom_random_index_extends_table() {
        let mut values = SAATY_RANDOM_INDEX.to_vec();
        values.push(1.60);
        let deriver = WeightDeriver::new().with_random_index(RandomIndexTable::new(values));

        let derived = deriver.derive(&ComparisonMatrix::uniform(16)).unwrap();
        assert_eq!(derived.consistency.random_index, 1.60);
    }

    #[test]
    fn custom_threshold_changes_verdict() {
        let deriver = WeightDeriver::new().with_threshold(0.001);
        let derived = deriver.derive(&reference_matrix()).unwrap();
        assert!(!derived.consistency.is_consistent());
    }

    #[test]
    fn consistency_of_external_weights() {
        let weights =
            WeightVector::new(vec![0.35092087, 0.18934932, 0.10880894, 0.35092087]).unwrap();
        let report = WeightDeriver::new()
            .consistency_of(&reference_matrix(), &weights)
            .unwrap();
        assert!((report.consistency_ratio - 0.00185).abs() < 1e-4);
    }

    #[test]
    fn consistency_of_rejects_weight_count_mismatch() {
        let err = WeightDeriver::new()
            .consistency_of(&reference_matrix(), &WeightVector::equal(3))
            .unwrap_err();
        assert!(matches!(
            err,
            RankingError::Configuration(ConfigurationError::MatrixSizeMismatch { .. })
        ));
    }

    #[test]
    fn consistency_of_rejects_zero_weight() {
        let weights = WeightVector::new(vec![1.0, 0.0]).unwrap();
        let matrix = ComparisonMatrix::uniform(2);
        let err = WeightDeriver::new().consistency_of(&matrix, &weights).unwrap_err();
        assert!(matches!(
            err,
            RankingError::Validation(ValidationError::ZeroDivision { .. })
        ));
    }

    #[test]
    fn warn_policy_accepts_inconsistent_report() {
        let report = ConsistencyReport {
            lambda_max: 3.5,
            consistency_index: 0.25,
            random_index: 0.58,
            consistency_ratio: 0.43,
            threshold: CONSISTENCY_THRESHOLD,
        };
        assert!(ConsistencyPolicy::Warn.enforce(&report).is_ok());
    }

    #[test]
    fn abort_policy_rejects_inconsistent_report() {
        let report = ConsistencyReport {
            lambda_max: 3.5,
            consistency_index: 0.25,
            random_index: 0.58,
            consistency_ratio: 0.43,
            threshold: CONSISTENCY_THRESHOLD,
        };
        assert_eq!(
            ConsistencyPolicy::Abort.enforce(&report),
            Err(RankingError::Inconsistent {
                ratio: 0.43,
                threshold: CONSISTENCY_THRESHOLD
            })
        );
    }

    #[test]
    fn abort_policy_accepts_consistent_report() {
        let derived = WeightDeriver::new().derive(&reference_matrix()).unwrap();
        assert!(ConsistencyPolicy::Abort.enforce(&derived.consistency).is_ok());
    }

    #[test]
    fn random_index_lookup_bounds() {
        let table = RandomIndexTable::saaty();
        assert_eq!(table.lookup(4), Ok(0.90));
        assert_eq!(table.max_size(), 15);
        assert_eq!(
            table.lookup(0),
            Err(ConfigurationError::RandomIndexUnavailable(0))
        );
    }
}
