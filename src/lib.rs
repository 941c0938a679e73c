//! MCDM Ranker - multi-criteria ranking of decision alternatives
//!
//! Derives criterion weights from a pairwise comparison matrix with AHP,
//! checks the judgments for consistency, and ranks alternatives with three
//! independent methods: SAW, WP and TOPSIS.
//!
//! ```no_run
//! use mcdm_ranker::application::RankingPipeline;
//! use mcdm_ranker::domain::analysis::{ComparisonMatrix, DecisionMatrix};
//!
//! let matrix = DecisionMatrix::builder()
//!     .cost("Price")
//!     .benefit("Area")
//!     .row("A1", vec![100.0, 50.0])
//!     .row("A2", vec![200.0, 80.0])
//!     .build()?;
//! let comparison = ComparisonMatrix::new(vec![vec![1.0, 2.0], vec![0.5, 1.0]])?;
//!
//! let report = RankingPipeline::new().run(&matrix, &comparison)?;
//! println!("best: {:?}", report.table.best());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod telemetry;
