//! Column means for the numeric equipment columns

use crate::app::models::{Averages, CellValue, NormalizedTable, NumericColumn};
use crate::{Error, Result};

/// Arithmetic mean of every numeric column at full precision
///
/// Fails on an empty table and on the first cell that does not hold a number.
pub fn column_averages(table: &NormalizedTable) -> Result<Averages> {
    if table.row_count() == 0 {
        return Err(Error::EmptyDataset);
    }

    Ok(Averages {
        flowrate: column_mean(table, NumericColumn::Flowrate)?,
        pressure: column_mean(table, NumericColumn::Pressure)?,
        temperature: column_mean(table, NumericColumn::Temperature)?,
    })
}

/// Sum of one numeric column, coercing each cell
pub fn column_sum(table: &NormalizedTable, column: NumericColumn) -> Result<f64> {
    Ok(column_values(table, column)?.iter().sum())
}

/// Mean of one numeric column
///
/// Large finite values whose plain sum overflows are averaged by summing
/// each value already divided by the row count.
pub fn column_mean(table: &NormalizedTable, column: NumericColumn) -> Result<f64> {
    let values = column_values(table, column)?;
    if values.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let count = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = if sum.is_finite() {
        sum / count
    } else {
        values.iter().map(|value| value / count).sum()
    };

    if !mean.is_finite() {
        return Err(Error::data_validation(format!(
            "Average of column '{}' is outside the representable range",
            column.column_name()
        )));
    }

    Ok(mean)
}

fn column_values(table: &NormalizedTable, column: NumericColumn) -> Result<Vec<f64>> {
    let name = column.column_name();
    let index = table
        .column_index(name)
        .ok_or_else(|| Error::schema(name))?;

    (0..table.row_count())
        .map(|row| {
            let raw = table.cell(row, index);
            CellValue::parse(raw)
                .as_f64()
                .ok_or_else(|| Error::type_coercion(name, row + 1, raw))
        })
        .collect()
}
