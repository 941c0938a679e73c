//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    PipelineError, PipelineStage, RankingPipeline, RunRankingCommand, RunRankingError,
    RunRankingHandler, RunRankingResult,
};
