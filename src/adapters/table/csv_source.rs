//! CSV alternative source.
//!
//! Binds every column by header name. The identifier column and one column
//! per configured criterion are required; location and category are
//! optional pass-through fields and default to empty strings.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::IdentityColumns;
use crate::domain::foundation::{Alternative, ConfigurationError, CriteriaSet};
use crate::ports::{AlternativeSource, TableError};

/// Loads alternatives from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvAlternativeSource {
    path: PathBuf,
    columns: IdentityColumns,
    delimiter: u8,
}

impl CsvAlternativeSource {
    pub fn new(path: impl Into<PathBuf>, columns: IdentityColumns) -> Self {
        Self {
            path: path.into(),
            columns,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlternativeSource for CsvAlternativeSource {
    fn load(&self, criteria: &CriteriaSet) -> Result<Vec<Alternative>, TableError> {
        let file = File::open(&self.path)?;
        parse_alternatives(file, &self.columns, criteria, self.delimiter)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses alternatives from CSV text.
///
/// Row numbers in errors count the header as row 1, matching what a
/// spreadsheet shows.
pub fn parse_alternatives<R: Read>(
    reader: R,
    columns: &IdentityColumns,
    criteria: &CriteriaSet,
    delimiter: u8,
) -> Result<Vec<Alternative>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let id_index =
        position(&columns.id).ok_or_else(|| TableError::MissingColumn(columns.id.clone()))?;
    let location_index = position(&columns.location);
    let category_index = position(&columns.category);
    let criterion_indexes = criteria
        .names()
        .into_iter()
        .map(|name| {
            position(name).ok_or_else(|| ConfigurationError::UnboundCriterion(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut alternatives = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = i + 2;
        let field = |index: Option<usize>| {
            index
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .to_string()
        };

        let values = criterion_indexes
            .iter()
            .zip(criteria.names())
            .map(|(&index, name)| {
                let cell = record.get(index).unwrap_or_default();
                cell.parse::<f64>().map_err(|_| TableError::InvalidNumber {
                    row,
                    column: name.to_string(),
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        alternatives.push(Alternative::new(
            field(Some(id_index)),
            field(location_index),
            field(category_index),
            values,
        ));
    }

    Ok(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Criterion;
    use std::io::{Cursor, Write};

    fn criteria() -> CriteriaSet {
        CriteriaSet::new(vec![
            Criterion::cost("C1"),
            Criterion::benefit("C2"),
        ])
        .unwrap()
    }

    #[test]
    fn binds_criteria_by_header_not_position() {
        let csv = "C2,Alternatif,Kategori,C1,Lokasi\n\
                   50,A1,Mall,100,North\n\
                   30, A2 ,Office,200,South\n";

        let alternatives =
            parse_alternatives(Cursor::new(csv), &IdentityColumns::default(), &criteria(), b',')
                .unwrap();

        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].id, "A1");
        assert_eq!(alternatives[0].location, "North");
        assert_eq!(alternatives[0].category, "Mall");
        assert_eq!(alternatives[0].values, vec![100.0, 50.0]);
        assert_eq!(alternatives[1].id, "A2");
        assert_eq!(alternatives[1].values, vec![200.0, 30.0]);
    }

    #[test]
    fn optional_identity_columns_default_to_empty() {
        let csv = "Alternatif,C1,C2\nA1,1,2\n";
        let alternatives =
            parse_alternatives(Cursor::new(csv), &IdentityColumns::default(), &criteria(), b',')
                .unwrap();
        assert_eq!(alternatives[0].location, "");
        assert_eq!(alternatives[0].category, "");
    }

    #[test]
    fn missing_criterion_column_is_reported() {
        let csv = "Alternatif,C1\nA1,1\n";
        let err =
            parse_alternatives(Cursor::new(csv), &IdentityColumns::default(), &criteria(), b',')
                .unwrap_err();
        assert!(matches!(
            err,
            TableError::Configuration(ConfigurationError::UnboundCriterion(ref name)) if name == "C2"
        ));
    }

    #[test]
    fn missing_identifier_column_is_reported() {
        let csv = "Name,C1,C2\nA1,1,2\n";
        let err =
            parse_alternatives(Cursor::new(csv), &IdentityColumns::default(), &criteria(), b',')
                .unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(ref name) if name == "Alternatif"));
    }

    #[test]
    fn unparseable_cell_names_row_and_column() {
        let csv = "Alternatif,C1,C2\nA1,1,2\nA2,n/a,3\n";
        let err =
            parse_alternatives(Cursor::new(csv), &IdentityColumns::default(), &criteria(), b',')
                .unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidNumber { row: 3, ref column, ref value } if column == "C1" && value == "n/a"
        ));
    }

    #[test]
    fn honors_custom_delimiter_and_columns() {
        let csv = "Site;Cost;Reach\nX;4;9\n";
        let columns = IdentityColumns::new("Site", "Area", "Kind");
        let criteria =
            CriteriaSet::new(vec![Criterion::cost("Cost"), Criterion::benefit("Reach")]).unwrap();

        let alternatives = parse_alternatives(Cursor::new(csv), &columns, &criteria, b';').unwrap();
        assert_eq!(alternatives[0].id, "X");
        assert_eq!(alternatives[0].values, vec![4.0, 9.0]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Alternatif,Lokasi,Kategori,C1,C2\nA1,North,Mall,1.5,2\n").unwrap();

        let source = CsvAlternativeSource::new(file.path(), IdentityColumns::default());
        let alternatives = source.load(&criteria()).unwrap();

        assert_eq!(alternatives[0].values, vec![1.5, 2.0]);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = CsvAlternativeSource::new("./does-not-exist.csv", IdentityColumns::default());
        assert!(matches!(source.load(&criteria()), Err(TableError::Io(_))));
    }
}
