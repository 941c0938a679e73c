//! Pipeline stages and the stage-tagged error they fail with.

use std::fmt;
use thiserror::Error;

use crate::domain::analysis::ScoringMethod;
use crate::domain::foundation::{ErrorCode, RankingError};

/// A step of a ranking run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    ValidateConfiguration,
    DeriveWeights,
    CheckConsistency,
    Score(ScoringMethod),
    Assemble,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::ValidateConfiguration => write!(f, "validate configuration"),
            PipelineStage::DeriveWeights => write!(f, "derive weights"),
            PipelineStage::CheckConsistency => write!(f, "check consistency"),
            PipelineStage::Score(method) => write!(f, "score ({})", method),
            PipelineStage::Assemble => write!(f, "assemble"),
        }
    }
}

/// A ranking failure together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Stage '{stage}' failed: {source}")]
pub struct PipelineError {
    pub stage: PipelineStage,
    #[source]
    pub source: RankingError,
}

impl PipelineError {
    /// Tags a domain failure with the stage that raised it.
    pub fn new(stage: PipelineStage, source: impl Into<RankingError>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }

    /// Error code of the underlying failure.
    pub fn code(&self) -> ErrorCode {
        self.source.code()
    }
}
