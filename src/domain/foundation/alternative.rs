//! Alternative value object: one candidate row of the decision table.

use serde::{Deserialize, Serialize};

/// One candidate under evaluation.
///
/// `id`, `location` and `category` pass through scoring untouched; only
/// `values` take part in the computation, one entry per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub location: String,
    pub category: String,
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates an alternative with identity fields and criterion values.
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        category: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            category: category.into(),
            values,
        }
    }

    /// Creates an alternative with only an identifier.
    pub fn anonymous(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(id, "", "", values)
    }

    /// Returns the value for a criterion column.
    pub fn value(&self, criterion: usize) -> Option<f64> {
        self.values.get(criterion).copied()
    }

    /// Returns the number of criterion values.
    pub fn width(&self) -> usize {
        self.values.len()
    }
}
