//! AlternativeSource port - Interface for loading the decision table.
//!
//! The core never reads files itself. A source hands over a fully
//! materialized list of alternatives whose values are already bound to the
//! configured criteria, in criterion order.

use crate::domain::foundation::{Alternative, CriteriaSet};

use super::TableError;

/// Port for loading alternatives.
///
/// # Contract
///
/// Implementations must:
/// - Bind criterion values by criterion name, not by column position
/// - Return values in the order of `criteria`
/// - Preserve input row order
/// - Report missing columns and unparseable cells as `TableError`
pub trait AlternativeSource: Send + Sync {
    /// Loads every alternative with one value per criterion.
    fn load(&self, criteria: &CriteriaSet) -> Result<Vec<Alternative>, TableError>;

    /// Short description of where the alternatives come from, for logs.
    fn describe(&self) -> String;
}
