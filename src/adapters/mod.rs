//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the ranking core to the outside world:
//! - `table` - CSV input and output, JSON reports, console rendering,
//!   and in-memory implementations for tests

pub mod table;

pub use table::{
    ConsoleTableRenderer, CsvAlternativeSource, CsvRankingExporter, IdentityColumns,
    InMemoryAlternativeSource, InMemoryRankingExporter, JsonRankingExporter,
};
