//! In-memory source and exporter for tests and embedding.

use std::sync::Mutex;

use crate::domain::analysis::RankingReport;
use crate::domain::foundation::{Alternative, CriteriaSet};
use crate::ports::{AlternativeSource, RankingExporter, TableError};

/// Serves a fixed list of alternatives.
///
/// Values are returned as given; they are expected to already be in
/// criterion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlternativeSource {
    alternatives: Vec<Alternative>,
}

impl InMemoryAlternativeSource {
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }
}

impl AlternativeSource for InMemoryAlternativeSource {
    fn load(&self, _criteria: &CriteriaSet) -> Result<Vec<Alternative>, TableError> {
        Ok(self.alternatives.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} alternatives)", self.alternatives.len())
    }
}

/// Captures every exported report.
#[derive(Debug, Default)]
pub struct InMemoryRankingExporter {
    reports: Mutex<Vec<RankingReport>>,
}

impl InMemoryRankingExporter {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all captured reports.
    pub fn reports(&self) -> Vec<RankingReport> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the most recent report.
    pub fn last(&self) -> Option<RankingReport> {
        self.reports().pop()
    }

    pub fn count(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl RankingExporter for InMemoryRankingExporter {
    fn export(&self, report: &RankingReport) -> Result<(), TableError> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(report.clone());
        Ok(())
    }
}
