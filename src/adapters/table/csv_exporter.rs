//! CSV ranking exporter.
//!
//! Output columns: identity columns, the criterion values, then
//! `SAW_Score`, `WP_Score`, `TOPSIS_Score`. Rows keep the report order.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use super::IdentityColumns;
use crate::domain::analysis::{RankingReport, ScoringMethod};
use crate::ports::{RankingExporter, TableError};

/// Writes the ranking table to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvRankingExporter {
    path: PathBuf,
    columns: IdentityColumns,
    delimiter: u8,
}

impl CsvRankingExporter {
    pub fn new(path: impl Into<PathBuf>, columns: IdentityColumns) -> Self {
        Self {
            path: path.into(),
            columns,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RankingExporter for CsvRankingExporter {
    fn export(&self, report: &RankingReport) -> Result<(), TableError> {
        let file = File::create(&self.path)?;
        write_table(file, report, &self.columns, self.delimiter)?;
        info!(
            path = %self.path.display(),
            rows = report.table.len(),
            "Ranking written"
        );
        Ok(())
    }
}

/// Writes the ranking table as CSV.
pub fn write_table<W: Write>(
    writer: W,
    report: &RankingReport,
    columns: &IdentityColumns,
    delimiter: u8,
) -> Result<(), TableError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut header: Vec<&str> = vec![
        columns.id.as_str(),
        columns.location.as_str(),
        columns.category.as_str(),
    ];
    header.extend(report.table.criteria.names());
    header.extend(ScoringMethod::ALL.iter().map(|m| m.column_name()));
    csv_writer.write_record(&header)?;

    for row in &report.table.rows {
        let alternative = &row.alternative;
        let mut record = vec![
            alternative.id.clone(),
            alternative.location.clone(),
            alternative.category.clone(),
        ];
        record.extend(alternative.values.iter().map(|v| v.to_string()));
        record.extend(ScoringMethod::ALL.iter().map(|m| row.scores.get(*m).to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
