//! Ranking Table - alternatives with their attached scores, sorted by one method.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{DecisionMatrix, ScoringMethod};
use crate::domain::foundation::{Alternative, CriteriaSet, ValidationError};

/// One score per scoring method for a single alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub saw: f64,
    pub wp: f64,
    pub topsis: f64,
}

impl ScoreSet {
    /// Returns the score of one method.
    pub fn get(&self, method: ScoringMethod) -> f64 {
        match method {
            ScoringMethod::Saw => self.saw,
            ScoringMethod::Wp => self.wp,
            ScoringMethod::Topsis => self.topsis,
        }
    }
}

/// Score columns produced by the three scorers, in alternative input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreColumns {
    pub saw: Vec<f64>,
    pub wp: Vec<f64>,
    pub topsis: Vec<f64>,
}

impl ScoreColumns {
    /// Stores the column for one method.
    pub fn set(&mut self, method: ScoringMethod, scores: Vec<f64>) {
        match method {
            ScoringMethod::Saw => self.saw = scores,
            ScoringMethod::Wp => self.wp = scores,
            ScoringMethod::Topsis => self.topsis = scores,
        }
    }

    /// Returns the column for one method.
    pub fn get(&self, method: ScoringMethod) -> &[f64] {
        match method {
            ScoringMethod::Saw => &self.saw,
            ScoringMethod::Wp => &self.wp,
            ScoringMethod::Topsis => &self.topsis,
        }
    }
}

/// An alternative with its scores and 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub rank: usize,
    pub alternative: Alternative,
    pub scores: ScoreSet,
}

/// Alternatives sorted descending by the score of one method.
///
/// Ties keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingTable {
    pub criteria: CriteriaSet,
    pub sorted_by: ScoringMethod,
    pub rows: Vec<RankedAlternative>,
}

impl RankingTable {
    /// Attaches score columns to the matrix alternatives and sorts them.
    ///
    /// # Errors
    /// - `ValidationError::ScoreCountMismatch` if a column length differs from
    ///   the alternative count
    pub fn assemble(
        matrix: &DecisionMatrix,
        columns: &ScoreColumns,
        sorted_by: ScoringMethod,
    ) -> Result<Self, ValidationError> {
        let expected = matrix.alternative_count();
        for method in ScoringMethod::ALL {
            let actual = columns.get(method).len();
            if actual != expected {
                return Err(ValidationError::ScoreCountMismatch {
                    method: method.label().to_string(),
                    expected,
                    actual,
                });
            }
        }

        let mut rows: Vec<RankedAlternative> = matrix
            .alternatives()
            .iter()
            .enumerate()
            .map(|(i, alt)| RankedAlternative {
                rank: 0,
                alternative: alt.clone(),
                scores: ScoreSet {
                    saw: columns.saw[i],
                    wp: columns.wp[i],
                    topsis: columns.topsis[i],
                },
            })
            .collect();

        rows.sort_by(|a, b| descending(a.scores.get(sorted_by), b.scores.get(sorted_by)));
        for (position, row) in rows.iter_mut().enumerate() {
            row.rank = position + 1;
        }

        Ok(Self {
            criteria: matrix.criteria().clone(),
            sorted_by,
            rows,
        })
    }

    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the first `n` rows.
    pub fn top(&self, n: usize) -> &[RankedAlternative] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Returns the top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.rows.first()
    }

    /// Finds a row by alternative identifier.
    pub fn find(&self, alternative_id: &str) -> Option<&RankedAlternative> {
        self.rows.iter().find(|row| row.alternative.id == alternative_id)
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
