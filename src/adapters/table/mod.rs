//! Tabular adapters - CSV, JSON, console and in-memory implementations of
//! the source and exporter ports.

mod columns;
mod console_renderer;
mod csv_exporter;
mod csv_source;
mod json_exporter;
mod memory;

pub use columns::IdentityColumns;
pub use console_renderer::{ConsoleTableRenderer, DEFAULT_DISPLAY_LIMIT};
pub use csv_exporter::{write_table, CsvRankingExporter};
pub use csv_source::{parse_alternatives, CsvAlternativeSource};
pub use json_exporter::JsonRankingExporter;
pub use memory::{InMemoryAlternativeSource, InMemoryRankingExporter};
