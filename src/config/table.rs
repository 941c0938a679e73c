//! Input/output table configuration

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Output format for the exported ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Table configuration (column bindings and display)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Header of the alternative identifier column
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Header of the location column
    #[serde(default = "default_location_column")]
    pub location_column: String,

    /// Header of the category column
    #[serde(default = "default_category_column")]
    pub category_column: String,

    /// Field delimiter for CSV input and output
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Number of rows printed to the console
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Format of the exported file
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl TableConfig {
    /// Delimiter as a byte for the csv crate
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b','
        }
    }

    /// Validate table configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("id_column"));
        }
        if self.location_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("location_column"));
        }
        if self.category_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("category_column"));
        }
        if !self.delimiter.is_ascii() {
            return Err(ValidationError::InvalidDelimiter);
        }
        if self.display_limit == 0 {
            return Err(ValidationError::InvalidDisplayLimit);
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            location_column: default_location_column(),
            category_column: default_category_column(),
            delimiter: default_delimiter(),
            display_limit: default_display_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

fn default_id_column() -> String {
    "Alternatif".to_string()
}

fn default_location_column() -> String {
    "Lokasi".to_string()
}

fn default_category_column() -> String {
    "Kategori".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_display_limit() -> usize {
    50
}
