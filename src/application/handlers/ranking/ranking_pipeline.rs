//! RankingPipeline - derive weights, score with every method, assemble the table.
//!
//! The pipeline is pure orchestration over already-loaded inputs:
//! 1. Validate that matrix, criteria and alternatives agree in size
//! 2. Derive AHP weights from the comparison matrix
//! 3. Apply the consistency policy
//! 4. Run SAW, WP and TOPSIS over the same weights
//! 5. Attach the scores and sort by the designated method
//!
//! Configuration and validation failures stop the run before any scoring;
//! no partial table is ever produced.

use tracing::{debug, info, warn};

use super::pipeline_error::{PipelineError, PipelineStage};
use crate::config::RankingConfig;
use crate::domain::analysis::{
    ComparisonMatrix, ConsistencyPolicy, DecisionMatrix, DegeneratePolicy, DerivedWeights,
    RankingReport, RankingTable, SawScorer, ScoreColumns, Scorer, ScoringMethod, TopsisScorer,
    WeightDeriver, WpScorer,
};
use crate::domain::foundation::ValidationError;

/// Reciprocity deviations above this are worth a log line.
const RECIPROCAL_DEVIATION_NOTICE: f64 = 0.05;

/// Orchestrates one ranking run.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    deriver: WeightDeriver,
    consistency_policy: ConsistencyPolicy,
    sort_by: ScoringMethod,
    max_alternatives: usize,
    saw: SawScorer,
    wp: WpScorer,
    topsis: TopsisScorer,
}

impl RankingPipeline {
    /// Creates a pipeline with the reference behavior: Saaty RI, 0.1
    /// threshold, warn on inconsistency, sort by TOPSIS.
    pub fn new() -> Self {
        Self {
            deriver: WeightDeriver::new(),
            consistency_policy: ConsistencyPolicy::Warn,
            sort_by: ScoringMethod::Topsis,
            max_alternatives: usize::MAX,
            saw: SawScorer::new(),
            wp: WpScorer::new(),
            topsis: TopsisScorer::new(),
        }
    }

    /// Creates a pipeline from the ranking configuration section.
    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new()
            .with_deriver(WeightDeriver::new().with_threshold(config.consistency_threshold))
            .with_consistency_policy(config.consistency_policy)
            .with_sort_by(config.sort_by)
            .with_max_alternatives(config.max_alternatives)
            .with_degenerate_policy(config.degenerate_policy)
    }

    /// Replaces the weight deriver (threshold and Random Index table).
    pub fn with_deriver(mut self, deriver: WeightDeriver) -> Self {
        self.deriver = deriver;
        self
    }

    /// Sets whether an inconsistent comparison matrix warns or aborts.
    pub fn with_consistency_policy(mut self, policy: ConsistencyPolicy) -> Self {
        self.consistency_policy = policy;
        self
    }

    /// Sets the score column the output table is sorted by.
    pub fn with_sort_by(mut self, method: ScoringMethod) -> Self {
        self.sort_by = method;
        self
    }

    /// Sets the largest alternative count accepted by validation.
    pub fn with_max_alternatives(mut self, limit: usize) -> Self {
        self.max_alternatives = limit;
        self
    }

    /// Sets how TOPSIS treats zero-norm columns and zero separations.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.topsis = TopsisScorer::with_policy(policy);
        self
    }

    /// Method the output table is sorted by.
    pub fn sort_by(&self) -> ScoringMethod {
        self.sort_by
    }

    /// Policy applied when the consistency ratio exceeds the threshold.
    pub fn consistency_policy(&self) -> ConsistencyPolicy {
        self.consistency_policy
    }

    /// Derives weights and applies the consistency policy, without scoring.
    ///
    /// # Errors
    /// - `DeriveWeights` stage: Random Index unavailable, zero weight
    /// - `CheckConsistency` stage: inconsistent matrix under `Abort`
    pub fn weights(&self, comparison: &ComparisonMatrix) -> Result<DerivedWeights, PipelineError> {
        let deviation = comparison.max_reciprocal_deviation();
        if deviation > RECIPROCAL_DEVIATION_NOTICE {
            debug!(deviation, "Comparison matrix is not fully reciprocal");
        }

        let derived = self
            .deriver
            .derive(comparison)
            .map_err(|err| PipelineError::new(PipelineStage::DeriveWeights, err))?;
        debug!(weights = ?derived.weights.as_slice(), "Derived criterion weights");

        let report = &derived.consistency;
        info!(
            lambda_max = report.lambda_max,
            consistency_index = report.consistency_index,
            consistency_ratio = report.consistency_ratio,
            status = report.status_label(),
            "Consistency check complete"
        );

        self.consistency_policy
            .enforce(report)
            .map_err(|err| PipelineError::new(PipelineStage::CheckConsistency, err))?;
        if !report.is_consistent() {
            warn!(
                consistency_ratio = report.consistency_ratio,
                threshold = report.threshold,
                "Judgment matrix is inconsistent, continuing with derived weights"
            );
        }

        Ok(derived)
    }

    /// Runs every stage and returns the sorted report.
    ///
    /// # Errors
    /// Returns the first failing stage; later stages never run.
    pub fn run(
        &self,
        matrix: &DecisionMatrix,
        comparison: &ComparisonMatrix,
    ) -> Result<RankingReport, PipelineError> {
        self.validate(matrix, comparison)?;
        let derived = self.weights(comparison)?;

        let scorers: [&dyn Scorer; 3] = [&self.saw, &self.wp, &self.topsis];
        let mut columns = ScoreColumns::default();
        for scorer in scorers {
            let method = scorer.method();
            let scores = scorer
                .score(matrix, &derived.weights)
                .map_err(|err| PipelineError::new(PipelineStage::Score(method), err))?;
            debug!(%method, alternatives = scores.len(), "Scoring complete");
            columns.set(method, scores);
        }

        let table = RankingTable::assemble(matrix, &columns, self.sort_by)
            .map_err(|err| PipelineError::new(PipelineStage::Assemble, err))?;

        if let Some(best) = table.best() {
            info!(
                alternatives = table.len(),
                sorted_by = %self.sort_by,
                best = %best.alternative.id,
                "Ranking complete"
            );
        }

        Ok(RankingReport::new(
            derived.weights,
            derived.consistency,
            table,
        ))
    }

    fn validate(
        &self,
        matrix: &DecisionMatrix,
        comparison: &ComparisonMatrix,
    ) -> Result<(), PipelineError> {
        let stage = PipelineStage::ValidateConfiguration;

        comparison
            .ensure_size(matrix.criterion_count())
            .map_err(|err| PipelineError::new(stage, err))?;

        if matrix.alternative_count() > self.max_alternatives {
            return Err(PipelineError::new(
                stage,
                ValidationError::TooManyAlternatives {
                    limit: self.max_alternatives,
                    actual: matrix.alternative_count(),
                },
            ));
        }

        debug!(
            criteria = matrix.criterion_count(),
            alternatives = matrix.alternative_count(),
            "Inputs validated"
        );
        Ok(())
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
