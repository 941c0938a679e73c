//! Top-level error for the command line entry point.

use thiserror::Error;

use crate::application::{PipelineError, RunRankingError};
use crate::config::{ConfigError, ValidationError};
use crate::domain::foundation::RankingError;
use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("configuration error: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Ranking(#[from] RankingError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("{0}")]
    Run(#[from] RunRankingError),
}
