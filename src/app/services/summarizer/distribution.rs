//! Equipment type distribution
//!
//! Groups rows by their exact `type` value; only column names are normalized. Chart order is descending count;
//! types with equal counts keep the order in which they first appear.

use crate::app::models::{NormalizedTable, TypeDistribution};
use crate::constants::COLUMN_TYPE;
use crate::{Error, Result};
use std::collections::HashMap;

/// Count rows per equipment type
pub fn type_distribution(table: &NormalizedTable) -> Result<TypeDistribution> {
    let index = table
        .column_index(COLUMN_TYPE)
        .ok_or_else(|| Error::schema(COLUMN_TYPE))?;

    let values = (0..table.row_count()).map(|row| table.cell(row, index));
    Ok(TypeDistribution::from_ordered_counts(ordered_counts(values)))
}

/// Count occurrences and order them by descending count, stable on ties
pub fn ordered_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match positions.get(value) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // sort_by is stable so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
