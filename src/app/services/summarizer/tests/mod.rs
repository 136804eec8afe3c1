//! Tests for the summarizer module


use crate::app::models::{NormalizedTable, RawTable};
use crate::app::services::schema_validator::validate_schema;

/// Standard header used by most fixtures
pub const HEADER: &[&str] = &[
    "Equipment Name",
    "Type",
    "Flowrate",
    "Pressure",
    "Temperature",
];

/// Build a validated table from string rows under [`HEADER`]
pub fn create_test_table(rows: &[&[&str]]) -> NormalizedTable {
    create_table_with_header(HEADER, rows)
}

/// Build a validated table from an explicit header
pub fn create_table_with_header(header: &[&str], rows: &[&[&str]]) -> NormalizedTable {
    let raw = RawTable::new(
        header.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    );
    validate_schema(raw).expect("fixture header should be valid")
}

/// The three-row example table: two type A, one type B
pub fn create_example_table() -> NormalizedTable {
    create_test_table(&[
        &["P-1", "A", "10", "100", "20"],
        &["P-2", "A", "20", "200", "30"],
        &["P-3", "B", "30", "300", "40"],
    ])
}
