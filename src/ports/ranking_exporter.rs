//! RankingExporter port - Interface for handing results to the outside world.

use crate::domain::analysis::RankingReport;

use super::TableError;

/// Port for exporting a finished ranking.
///
/// # Contract
///
/// Implementations must:
/// - Emit rows in the order of `report.table.rows`
/// - Never alter scores (formatting precision is the adapter's choice)
pub trait RankingExporter: Send + Sync {
    /// Exports the report.
    fn export(&self, report: &RankingReport) -> Result<(), TableError>;
}
