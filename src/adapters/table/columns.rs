//! Header names of the pass-through identity columns.

use crate::config::TableConfig;

/// Identity column headers shared by the CSV source and exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityColumns {
    pub id: String,
    pub location: String,
    pub category: String,
}

impl IdentityColumns {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            category: category.into(),
        }
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(
            config.id_column.clone(),
            config.location_column.clone(),
            config.category_column.clone(),
        )
    }
}

impl Default for IdentityColumns {
    fn default() -> Self {
        Self::new("Alternatif", "Lokasi", "Kategori")
    }
}
