//! Row records with native cell types

use crate::app::models::{CellValue, NormalizedTable, RowRecord};

/// Coerce every row into a record keyed by normalized column name
///
/// When two headers normalize to the same name the first one wins, matching
/// the column lookups used for the statistics.
pub fn row_records(table: &NormalizedTable) -> Vec<RowRecord> {
    (0..table.row_count())
        .map(|row| {
            let mut record = RowRecord::new();
            for (index, column) in table.columns().iter().enumerate() {
                record
                    .entry(column.clone())
                    .or_insert_with(|| CellValue::parse(table.cell(row, index)));
            }
            record
        })
        .collect()
}
