//! Ranking handlers.

mod pipeline_error;
mod ranking_pipeline;
mod run_ranking;

pub use pipeline_error::{PipelineError, PipelineStage};
pub use ranking_pipeline::RankingPipeline;
pub use run_ranking::{RunRankingCommand, RunRankingError, RunRankingHandler, RunRankingResult};
