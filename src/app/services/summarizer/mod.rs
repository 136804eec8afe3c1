//! Summary statistics for validated equipment tables
//!
//! Turns a [`NormalizedTable`] into a [`Summary`] plus the row records with
//! every cell coerced to its native type.
//!
//! # Architecture
//!
//! - [`averages`] - Full-precision means of the numeric columns
//! - [`distribution`] - Equipment type counts and their chart ordering
//! - [`records`] - Per-row coercion of cell text
//!
//! # Failure modes
//!
//! A table with no rows is rejected with [`Error::EmptyDataset`] rather than
//! producing undefined means, and a numeric column holding anything other
//! than a number is rejected with [`Error::TypeCoercion`].
//!
//! [`Error::EmptyDataset`]: crate::Error::EmptyDataset
//! [`Error::TypeCoercion`]: crate::Error::TypeCoercion

pub mod averages;
pub mod distribution;
pub mod records;

#[cfg(test)]
pub mod tests;

use crate::Result;
use crate::app::models::{Analysis, NormalizedTable, Summary};
use tracing::debug;

pub use averages::column_averages;
pub use distribution::type_distribution;
pub use records::row_records;

/// Compute the summary and row records of a validated table
pub fn summarize(table: &NormalizedTable) -> Result<Analysis> {
    let averages = column_averages(table)?;
    let type_distribution = type_distribution(table)?;
    let rows = row_records(table);

    let summary = Summary {
        total_equipment: table.row_count(),
        averages,
        type_distribution,
    };

    debug!(
        "Summarized {} rows into {} equipment types",
        summary.total_equipment,
        summary.type_distribution.len()
    );

    Ok(Analysis { summary, rows })
}
