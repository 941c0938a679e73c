//! Ranking Report - everything one ranking run produced.

use serde::Serialize;

use super::{ConsistencyReport, RankingTable, WeightVector};
use crate::domain::foundation::{RunId, Timestamp};

/// Result of one ranking run, handed to exporters.
///
/// `run_id` and `computed_at` identify the run; the weights and score
/// columns depend only on the inputs and configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub weights: WeightVector,
    pub consistency: ConsistencyReport,
    pub table: RankingTable,
}

impl RankingReport {
    /// Creates a report stamped with a fresh run id and the current time.
    pub fn new(weights: WeightVector, consistency: ConsistencyReport, table: RankingTable) -> Self {
        Self {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            weights,
            consistency,
            table,
        }
    }

    /// Weights paired with their criterion names.
    pub fn named_weights(&self) -> Vec<(&str, f64)> {
        self.table
            .criteria
            .names()
            .into_iter()
            .zip(self.weights.as_slice().iter().copied())
            .collect()
    }
}
