//! RunRankingHandler - Command handler for a complete ranking run.
//!
//! Loads alternatives through the source port, runs the pipeline, and hands
//! the report to every configured exporter in order.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::pipeline_error::{PipelineError, PipelineStage};
use super::ranking_pipeline::RankingPipeline;
use crate::domain::analysis::{ComparisonMatrix, DecisionMatrix, RankingReport};
use crate::domain::foundation::CriteriaSet;
use crate::ports::{AlternativeSource, RankingExporter, TableError};

/// Command to rank the alternatives of one source.
#[derive(Debug, Clone)]
pub struct RunRankingCommand {
    pub criteria: CriteriaSet,
    pub comparison: ComparisonMatrix,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunRankingResult {
    pub report: RankingReport,
}

/// Errors from a complete ranking run.
#[derive(Debug, Error)]
pub enum RunRankingError {
    #[error("Failed to load alternatives from {origin}: {source}")]
    Source {
        origin: String,
        #[source]
        source: TableError,
    },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Export failed: {0}")]
    Export(#[source] TableError),
}

/// Handler for ranking runs.
pub struct RunRankingHandler {
    source: Arc<dyn AlternativeSource>,
    exporters: Vec<Arc<dyn RankingExporter>>,
    pipeline: RankingPipeline,
}

impl RunRankingHandler {
    /// Creates a handler that reads from `source` and writes to every exporter in order.
    pub fn new(
        source: Arc<dyn AlternativeSource>,
        exporters: Vec<Arc<dyn RankingExporter>>,
        pipeline: RankingPipeline,
    ) -> Self {
        Self {
            source,
            exporters,
            pipeline,
        }
    }

    /// Loads, ranks and exports one run.
    ///
    /// # Errors
    /// - `RunRankingError::Source` if the alternatives cannot be loaded
    /// - `RunRankingError::Pipeline` if any ranking stage fails
    /// - `RunRankingError::Export` on the first exporter that fails
    pub fn handle(&self, cmd: RunRankingCommand) -> Result<RunRankingResult, RunRankingError> {
        // 1. Load alternatives bound to the configured criteria
        let alternatives =
            self.source
                .load(&cmd.criteria)
                .map_err(|source| RunRankingError::Source {
                    origin: self.source.describe(),
                    source,
                })?;
        info!(
            source = %self.source.describe(),
            alternatives = alternatives.len(),
            "Loaded alternatives"
        );

        // 2. Build the decision matrix
        let matrix = DecisionMatrix::new(cmd.criteria, alternatives)
            .map_err(|err| PipelineError::new(PipelineStage::ValidateConfiguration, err))?;

        // 3. Rank
        let report = self.pipeline.run(&matrix, &cmd.comparison)?;

        // 4. Export
        for exporter in &self.exporters {
            exporter.export(&report).map_err(RunRankingError::Export)?;
        }

        Ok(RunRankingResult { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Alternative, ConfigurationError, Criterion, ValidationError};
    use std::sync::Mutex;

    struct MockSource {
        alternatives: Vec<Alternative>,
        fail: bool,
    }

    impl AlternativeSource for MockSource {
        fn load(&self, _criteria: &CriteriaSet) -> Result<Vec<Alternative>, TableError> {
            if self.fail {
                return Err(ConfigurationError::UnboundCriterion("C4".into()).into());
            }
            Ok(self.alternatives.clone())
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    #[derive(Default)]
    struct MockExporter {
        reports: Mutex<Vec<RankingReport>>,
        fail: bool,
    }

    impl RankingExporter for MockExporter {
        fn export(&self, report: &RankingReport) -> Result<(), TableError> {
            if self.fail {
                return Err(TableError::Serialization("disk full".into()));
            }
            self.reports.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    fn command() -> RunRankingCommand {
        RunRankingCommand {
            criteria: CriteriaSet::new(vec![Criterion::cost("Price"), Criterion::benefit("Area")])
                .unwrap(),
            comparison: ComparisonMatrix::new(vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap(),
        }
    }

    fn source(fail: bool) -> Arc<MockSource> {
        Arc::new(MockSource {
            alternatives: vec![
                Alternative::anonymous("A", vec![10.0, 50.0]),
                Alternative::anonymous("B", vec![20.0, 80.0]),
            ],
            fail,
        })
    }

    #[test]
    fn handle_exports_report_to_every_exporter() {
        let first = Arc::new(MockExporter::default());
        let second = Arc::new(MockExporter::default());
        let handler = RunRankingHandler::new(
            source(false),
            vec![first.clone() as Arc<dyn RankingExporter>, second.clone()],
            RankingPipeline::new(),
        );

        let result = handler.handle(command()).unwrap();

        assert_eq!(result.report.table.len(), 2);
        assert_eq!(first.reports.lock().unwrap().len(), 1);
        assert_eq!(second.reports.lock().unwrap()[0], result.report);
    }

    #[test]
    fn source_failure_names_origin() {
        let handler = RunRankingHandler::new(source(true), vec![], RankingPipeline::new());

        let err = handler.handle(command()).unwrap_err();
        assert!(matches!(err, RunRankingError::Source { ref origin, .. } if origin == "mock"));
    }

    #[test]
    fn row_width_mismatch_is_a_pipeline_error() {
        let narrow = Arc::new(MockSource {
            alternatives: vec![Alternative::anonymous("A", vec![1.0])],
            fail: false,
        });
        let handler = RunRankingHandler::new(narrow, vec![], RankingPipeline::new());

        let err = handler.handle(command()).unwrap_err();
        match err {
            RunRankingError::Pipeline(err) => {
                assert_eq!(err.stage, PipelineStage::ValidateConfiguration);
                assert!(matches!(
                    err.source,
                    crate::domain::foundation::RankingError::Validation(
                        ValidationError::RowWidthMismatch { .. }
                    )
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn export_failure_is_reported() {
        let failing = Arc::new(MockExporter {
            fail: true,
            ..Default::default()
        });
        let handler = RunRankingHandler::new(
            source(false),
            vec![failing as Arc<dyn RankingExporter>],
            RankingPipeline::new(),
        );

        assert!(matches!(
            handler.handle(command()),
            Err(RunRankingError::Export(_))
        ));
    }
}
