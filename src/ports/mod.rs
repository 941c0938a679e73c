//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AlternativeSource` - Loads the decision table (spreadsheet, CSV, memory)
//! - `RankingExporter` - Writes or displays the finished ranking

mod alternative_source;
mod ranking_exporter;
mod table_error;

pub use alternative_source::AlternativeSource;
pub use ranking_exporter::RankingExporter;
pub use table_error::TableError;
