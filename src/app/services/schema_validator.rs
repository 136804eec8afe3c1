//! Required-column validation for uploaded equipment tables

use crate::app::models::{NormalizedTable, RawTable};
use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use tracing::debug;

/// Normalize a header name: strip a byte-order mark, trim whitespace, lowercase
pub fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Check that every required column is present after normalization
///
/// Columns are checked in the fixed order of [`REQUIRED_COLUMNS`] and the
/// first missing one is reported. Extra columns are kept untouched.
pub fn validate_schema(table: RawTable) -> Result<NormalizedTable> {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|column| normalize_column_name(column))
        .collect();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|required| !columns.iter().any(|column| column == *required))
    {
        return Err(Error::schema(*missing));
    }

    debug!(
        "Schema valid: {} columns, {} rows",
        columns.len(),
        table.records.len()
    );

    Ok(NormalizedTable::from_parts(columns, table.records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str]) -> RawTable {
        RawTable::new(columns.iter().map(|c| c.to_string()).collect(), Vec::new())
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  Equipment Name "), "equipment name");
        assert_eq!(normalize_column_name("\u{feff}TYPE"), "type");
    }

    #[test]
    fn test_validate_schema_accepts_mixed_case_and_whitespace() {
        let normalized = validate_schema(table(&[
            " Equipment Name",
            "TYPE ",
            "Flowrate",
            "Pressure",
            "Temperature",
            "Notes",
        ]))
        .unwrap();

        assert_eq!(
            normalized.columns(),
            &[
                "equipment name",
                "type",
                "flowrate",
                "pressure",
                "temperature",
                "notes"
            ]
        );
    }

    #[test]
    fn test_validate_schema_reports_first_missing_column() {
        let error = validate_schema(table(&["Equipment Name", "Flowrate"])).unwrap_err();
        match error {
            Error::Schema { column } => assert_eq!(column, "type"),
            other => panic!("unexpected error: {other:?}"),
        }

        let error = validate_schema(table(&[])).unwrap_err();
        assert!(matches!(error, Error::Schema { column } if column == "equipment name"));
    }

    #[test]
    fn test_validate_schema_each_required_column_is_checked() {
        for (index, required) in REQUIRED_COLUMNS.iter().enumerate() {
            let mut columns: Vec<&str> = REQUIRED_COLUMNS.to_vec();
            columns.remove(index);

            let error = validate_schema(table(&columns)).unwrap_err();
            assert!(
                matches!(&error, Error::Schema { column } if column == required),
                "expected missing '{}', got {:?}",
                required,
                error
            );
        }
    }

    #[test]
    fn test_schema_error_message_names_column() {
        let error = validate_schema(table(&["equipment name", "type"])).unwrap_err();
        assert_eq!(error.to_string(), "Missing required column: flowrate");
    }
}
