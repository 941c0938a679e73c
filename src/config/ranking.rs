//! Ranking configuration: criteria, judgments and run policies

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::domain::analysis::{
    ComparisonMatrix, ConsistencyPolicy, DegeneratePolicy, ScoringMethod, CONSISTENCY_THRESHOLD,
};
use crate::domain::foundation::{CriteriaSet, Criterion, RankingError};

/// Ranking configuration
///
/// The criteria list and the comparison matrix are the only tunable inputs
/// of the scoring core; both are fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Ordered criteria with their benefit/cost type
    #[serde(default = "default_criteria")]
    pub criteria: Vec<Criterion>,

    /// Pairwise comparison matrix, one row per criterion
    #[serde(default = "default_comparison_matrix")]
    pub comparison_matrix: Vec<Vec<f64>>,

    /// Whether an inconsistent matrix stops the run
    #[serde(default)]
    pub consistency_policy: ConsistencyPolicy,

    /// Consistency ratio threshold
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Method whose score orders the output table
    #[serde(default = "default_sort_by")]
    pub sort_by: ScoringMethod,

    /// How TOPSIS handles constant or all-zero columns
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Upper bound on the number of alternatives accepted in one run
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
}

impl RankingConfig {
    /// Builds the validated criteria set.
    pub fn criteria_set(&self) -> Result<CriteriaSet, RankingError> {
        Ok(CriteriaSet::new(self.criteria.clone())?)
    }

    /// Builds the validated comparison matrix.
    pub fn comparison_matrix(&self) -> Result<ComparisonMatrix, RankingError> {
        ComparisonMatrix::new(self.comparison_matrix.clone())
    }

    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::NoCriteria);
        }
        self.criteria_set()
            .map_err(|e| ValidationError::InvalidCriteria(e.to_string()))?;
        if self.comparison_matrix.len() != self.criteria.len() {
            return Err(ValidationError::MatrixSizeMismatch {
                criteria: self.criteria.len(),
                rows: self.comparison_matrix.len(),
            });
        }
        self.comparison_matrix()
            .map_err(|e| ValidationError::InvalidComparisonMatrix(e.to_string()))?;
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(ValidationError::InvalidThreshold);
        }
        if self.max_alternatives == 0 {
            return Err(ValidationError::InvalidMaxAlternatives);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
            comparison_matrix: default_comparison_matrix(),
            consistency_policy: ConsistencyPolicy::default(),
            consistency_threshold: default_consistency_threshold(),
            sort_by: default_sort_by(),
            degenerate_policy: DegeneratePolicy::default(),
            max_alternatives: default_max_alternatives(),
        }
    }
}

// C1 price, C2 area, C3 density, C4 distance
fn default_criteria() -> Vec<Criterion> {
    vec![
        Criterion::cost("C1"),
        Criterion::benefit("C2"),
        Criterion::benefit("C3"),
        Criterion::cost("C4"),
    ]
}

fn default_comparison_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![1.00, 2.00, 3.00, 1.00],
        vec![0.50, 1.00, 2.00, 0.50],
        vec![0.33, 0.50, 1.00, 0.33],
        vec![1.00, 2.00, 3.00, 1.00],
    ]
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_sort_by() -> ScoringMethod {
    ScoringMethod::Topsis
}

fn default_max_alternatives() -> usize {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CriterionType;

    #[test]
    fn test_ranking_config_defaults() {
        let config = RankingConfig::default();
        assert_eq!(config.criteria.len(), 4);
        assert_eq!(config.criteria[0].kind, CriterionType::Cost);
        assert_eq!(config.criteria[3].kind, CriterionType::Cost);
        assert_eq!(config.sort_by, ScoringMethod::Topsis);
        assert_eq!(config.consistency_policy, ConsistencyPolicy::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_matrix_size_mismatch() {
        let config = RankingConfig {
            comparison_matrix: vec![vec![1.0, 2.0], vec![0.5, 1.0]],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MatrixSizeMismatch { criteria: 4, rows: 2 })
        ));
    }

    #[test]
    fn test_validation_non_positive_entry() {
        let mut config = RankingConfig::default();
        config.comparison_matrix[1][2] = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidComparisonMatrix(_))
        ));
    }

    #[test]
    fn test_validation_duplicate_criteria() {
        let mut config = RankingConfig::default();
        config.criteria[1].name = "C1".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn test_validation_invalid_threshold() {
        let config = RankingConfig {
            consistency_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_alternatives() {
        let config = RankingConfig {
            max_alternatives: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ranking_config_deserialization() {
        let yaml = r#"
criteria:
  - name: Price
    type: cost
  - name: Quality
    type: benefit
comparison_matrix:
  - [1, 3]
  - [0.3333, 1]
consistency_policy: abort
sort_by: saw
"#;
        let config: RankingConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.criteria[1].name, "Quality");
        assert_eq!(config.consistency_policy, ConsistencyPolicy::Abort);
        assert_eq!(config.sort_by, ScoringMethod::Saw);
        assert_eq!(config.max_alternatives, 10_000);
        assert!(config.validate().is_ok());
    }
}
