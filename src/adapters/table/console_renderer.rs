//! Console table renderer.
//!
//! Prints the top rows of a ranking as a boxed text table:
//!
//! ```text
//! +------+------------+--------+-----------+-----------+--------------+
//! | Rank | Alternatif | Lokasi | SAW_Score | WP_Score  | TOPSIS_Score |
//! +------+------------+--------+-----------+-----------+--------------+
//! |    1 | A2         | South  |  0.775000 |  0.525320 |     0.558992 |
//! +------+------------+--------+-----------+-----------+--------------+
//! Showing 1 of 2 alternatives, sorted by TOPSIS
//! ```

use std::io::{self, Write};

use super::IdentityColumns;
use crate::domain::analysis::{DerivedWeights, RankingReport, ScoringMethod};
use crate::domain::foundation::CriteriaSet;
use crate::ports::{RankingExporter, TableError};

/// Default number of rows shown.
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;

const SCORE_PRECISION: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Renders ranking reports as text tables on stdout.
#[derive(Debug, Clone)]
pub struct ConsoleTableRenderer {
    columns: IdentityColumns,
    limit: usize,
}

impl ConsoleTableRenderer {
    pub fn new(columns: IdentityColumns) -> Self {
        Self {
            columns,
            limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    /// Sets how many rows are shown; at least one.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Writes the ranking table followed by a "showing N of M" footer.
    pub fn render<W: Write>(&self, report: &RankingReport, writer: &mut W) -> io::Result<()> {
        let mut headers = vec![
            ("Rank".to_string(), Align::Right),
            (self.columns.id.clone(), Align::Left),
            (self.columns.location.clone(), Align::Left),
        ];
        headers.extend(
            ScoringMethod::ALL
                .iter()
                .map(|m| (m.column_name().to_string(), Align::Right)),
        );

        let shown = report.table.top(self.limit);
        let rows: Vec<Vec<String>> = shown
            .iter()
            .map(|row| {
                let mut cells = vec![
                    row.rank.to_string(),
                    row.alternative.id.clone(),
                    row.alternative.location.clone(),
                ];
                cells.extend(
                    ScoringMethod::ALL
                        .iter()
                        .map(|m| format!("{:.*}", SCORE_PRECISION, row.scores.get(*m))),
                );
                cells
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, (title, _))| {
                rows.iter()
                    .map(|cells| cells[i].chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = border_line(&widths);
        let titles: Vec<String> = headers.iter().map(|(title, _)| title.clone()).collect();
        let header_aligns = vec![Align::Left; headers.len()];
        let aligns: Vec<Align> = headers.iter().map(|(_, align)| *align).collect();

        writeln!(writer, "{}", border)?;
        writeln!(writer, "{}", table_row(&titles, &widths, &header_aligns))?;
        writeln!(writer, "{}", border)?;
        for cells in &rows {
            writeln!(writer, "{}", table_row(cells, &widths, &aligns))?;
        }
        writeln!(writer, "{}", border)?;
        writeln!(
            writer,
            "Showing {} of {} alternatives, sorted by {}",
            shown.len(),
            report.table.len(),
            report.table.sorted_by
        )?;
        Ok(())
    }

    /// Writes the weight of every criterion and the consistency summary.
    pub fn render_weights<W: Write>(
        &self,
        criteria: &CriteriaSet,
        derived: &DerivedWeights,
        writer: &mut W,
    ) -> io::Result<()> {
        let name_width = criteria
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(writer, "AHP weights:")?;
        for (criterion, weight) in criteria.iter().zip(derived.weights.as_slice()) {
            writeln!(
                writer,
                "  {:<width$}  {:>6}  {:.*}",
                criterion.name,
                criterion.kind.label(),
                SCORE_PRECISION,
                weight,
                width = name_width
            )?;
        }
        writeln!(writer, "Total weight: {:.*}", SCORE_PRECISION, derived.weights.sum())?;

        let report = &derived.consistency;
        writeln!(writer, "Lambda max: {:.5}", report.lambda_max)?;
        writeln!(writer, "Consistency Index (CI): {:.5}", report.consistency_index)?;
        writeln!(writer, "Random Index (RI): {:.2}", report.random_index)?;
        writeln!(writer, "Consistency Ratio (CR): {:.5}", report.consistency_ratio)?;
        writeln!(writer, "Status: {}", report.status_label())?;
        Ok(())
    }
}

impl Default for ConsoleTableRenderer {
    fn default() -> Self {
        Self::new(IdentityColumns::default())
    }
}

impl RankingExporter for ConsoleTableRenderer {
    fn export(&self, report: &RankingReport) -> Result<(), TableError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render(report, &mut handle)?;
        handle.flush()?;
        Ok(())
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn table_row(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let mut line = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(aligns) {
        let padded = match align {
            Align::Left => format!(" {:<width$} ", cell, width = *width),
            Align::Right => format!(" {:>width$} ", cell, width = *width),
        };
        line.push_str(&padded);
        line.push('|');
    }
    line
}
