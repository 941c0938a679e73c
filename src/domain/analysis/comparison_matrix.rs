//! Comparison Matrix - pairwise importance judgments between criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConfigurationError, RankingError, ValidationError};

/// Square matrix where entry (i, j) is the judged importance of criterion i
/// relative to criterion j.
///
/// Entries must be positive and finite. Reciprocity (`m[i][j] * m[j][i] == 1`)
/// is expected of a well-formed judgment but not enforced; see
/// [`ComparisonMatrix::max_reciprocal_deviation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Creates a comparison matrix after checking shape and positivity.
    ///
    /// # Errors
    /// - `ConfigurationError::EmptyCriteria` for a 0x0 matrix
    /// - `ConfigurationError::MatrixNotSquare` when a row length differs from the row count
    /// - `ValidationError::NonPositiveComparison` for entries `<= 0`, NaN or infinite
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, RankingError> {
        let n = rows.len();
        if n == 0 {
            return Err(ConfigurationError::EmptyCriteria.into());
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ConfigurationError::MatrixNotSquare {
                    row: i,
                    expected: n,
                    actual: row.len(),
                }
                .into());
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ValidationError::NonPositiveComparison {
                        row: i,
                        col: j,
                        value,
                    }
                    .into());
                }
            }
        }

        Ok(Self { rows })
    }

    /// Creates an N x N matrix of ones (every criterion equally important).
    pub fn uniform(n: usize) -> Self {
        Self {
            rows: vec![vec![1.0; n]; n],
        }
    }

    /// Returns N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns entry (i, j).
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sums of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|j| self.rows.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Multiplies the matrix by a vector of length N.
    pub fn multiply(&self, vector: &[f64]) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
            .collect()
    }

    /// Checks that the matrix is sized for `expected` criteria.
    pub fn ensure_size(&self, expected: usize) -> Result<(), ConfigurationError> {
        if self.size() != expected {
            return Err(ConfigurationError::MatrixSizeMismatch {
                expected,
                actual: self.size(),
            });
        }
        Ok(())
    }

    /// Largest `|m[i][j] * m[j][i] - 1|` over all pairs.
    ///
    /// Zero for a perfectly reciprocal matrix. Rounded judgments such as
    /// `3` against `0.33` show up as small non-zero values.
    pub fn max_reciprocal_deviation(&self) -> f64 {
        let n = self.size();
        let mut worst: f64 = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let deviation = (self.rows[i][j] * self.rows[j][i] - 1.0).abs();
                worst = worst.max(deviation);
            }
        }
        worst
    }
}

impl<'de> Deserialize<'de> for ComparisonMatrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        ComparisonMatrix::new(rows).map_err(serde::de::Error::custom)
    }
}
