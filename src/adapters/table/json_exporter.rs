//! JSON ranking exporter.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::analysis::RankingReport;
use crate::ports::{RankingExporter, TableError};

/// Writes the full report (run metadata, weights, consistency, rows) as
/// pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonRankingExporter {
    path: PathBuf,
}

impl JsonRankingExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RankingExporter for JsonRankingExporter {
    fn export(&self, report: &RankingReport) -> Result<(), TableError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(path = %self.path.display(), rows = report.table.len(), "Report written");
        Ok(())
    }
}
