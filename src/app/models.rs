//! Data models for equipment dataset analysis
//!
//! This module contains the core data structures for representing uploaded
//! equipment tables, the summaries computed from them and the dataset records
//! retained by the history store.

use crate::constants::{self, DISPLAY_DECIMALS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Tables
// =============================================================================

/// A delimited table as read from an upload, before any validation
///
/// Column names are kept exactly as they appear in the header row and every
/// cell is kept as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Header row
    pub columns: Vec<String>,

    /// Data rows, each with one cell per column
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { columns, records }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// A table whose column names have been trimmed and lowercased and which is
/// known to contain every required column
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    columns: Vec<String>,
    records: Vec<Vec<String>>,
}

impl NormalizedTable {
    /// Construct from already-normalized parts. Only the schema validator
    /// produces these so the required-column guarantee holds.
    pub(crate) fn from_parts(columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { columns, records }
    }

    /// Normalized column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Raw cell text for every data row
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Index of the first column with this normalized name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell text at the given row and column, empty when the row is short
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.records
            .get(row)
            .and_then(|record| record.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

// =============================================================================
// Row Records
// =============================================================================

/// A single cell coerced to its native type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Coerce raw cell text: empty is null, integer and finite decimal
    /// literals are numbers, anything else is text
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }

        if let Ok(integer) = trimmed.parse::<i64>() {
            return CellValue::Integer(integer);
        }

        match trimmed.parse::<f64>() {
            Ok(float) if float.is_finite() => CellValue::Float(float),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Numeric value, if this cell holds a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(value) => Some(*value as f64),
            CellValue::Float(value) => Some(*value),
            CellValue::Text(_) | CellValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Null => Ok(()),
        }
    }
}

/// One uploaded row keyed by normalized column name
pub type RowRecord = BTreeMap<String, CellValue>;

// =============================================================================
// Summary
// =============================================================================

/// The numeric columns that are averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericColumn {
    Flowrate,
    Pressure,
    Temperature,
}

impl NumericColumn {
    /// All numeric columns in report order
    pub const ALL: [NumericColumn; 3] = [
        NumericColumn::Flowrate,
        NumericColumn::Pressure,
        NumericColumn::Temperature,
    ];

    /// Normalized column name in the uploaded table
    pub fn column_name(&self) -> &'static str {
        match self {
            NumericColumn::Flowrate => constants::COLUMN_FLOWRATE,
            NumericColumn::Pressure => constants::COLUMN_PRESSURE,
            NumericColumn::Temperature => constants::COLUMN_TEMPERATURE,
        }
    }

    /// Capitalized name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            NumericColumn::Flowrate => "Flowrate",
            NumericColumn::Pressure => "Pressure",
            NumericColumn::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Full-precision column means
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

impl Averages {
    /// Mean of the given column
    pub fn get(&self, column: NumericColumn) -> f64 {
        match column {
            NumericColumn::Flowrate => self.flowrate,
            NumericColumn::Pressure => self.pressure,
            NumericColumn::Temperature => self.temperature,
        }
    }
}

/// Chart-ready projection of the type distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Type labels, most frequent first
    pub labels: Vec<String>,

    /// Counts parallel to `labels`
    pub values: Vec<usize>,
}

/// Count of rows per distinct equipment type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDistribution {
    /// Type value to occurrence count
    pub raw: BTreeMap<String, usize>,

    /// Labels and counts ordered by descending count, ties in first-seen order
    pub chart: ChartSeries,
}

impl TypeDistribution {
    /// Build from counts that are already in chart order
    pub fn from_ordered_counts(counts: Vec<(String, usize)>) -> Self {
        let mut distribution = TypeDistribution::default();
        for (label, count) in counts {
            distribution.raw.insert(label.clone(), count);
            distribution.chart.labels.push(label);
            distribution.chart.values.push(count);
        }
        distribution
    }

    /// (label, count) pairs in chart order
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.chart
            .labels
            .iter()
            .map(String::as_str)
            .zip(self.chart.values.iter().copied())
    }

    /// Number of distinct types
    pub fn len(&self) -> usize {
        self.chart.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chart.labels.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.raw.values().sum()
    }
}

/// Aggregate statistics computed from one uploaded dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of equipment rows
    pub total_equipment: usize,

    /// Full-precision means of the numeric columns
    pub averages: Averages,

    /// Rows per equipment type
    pub type_distribution: TypeDistribution,
}

impl Summary {
    /// Average rounded for display
    pub fn display_average(&self, column: NumericColumn) -> String {
        format!("{:.*}", DISPLAY_DECIMALS, self.averages.get(column))
    }
}

/// Result of analyzing one table: the summary and every coerced row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: Summary,

    #[serde(rename = "data")]
    pub rows: Vec<RowRecord>,
}

// =============================================================================
// Dataset Records
// =============================================================================

/// A dataset ready to be stored; id and upload time are assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewDataset {
    pub filename: String,
    pub summary: Summary,
}

impl NewDataset {
    pub fn new(filename: impl Into<String>, summary: Summary) -> Self {
        Self {
            filename: filename.into(),
            summary,
        }
    }
}

/// A stored upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Unique, monotonically assigned identifier
    pub id: u64,

    /// Name of the uploaded file
    pub filename: String,

    /// Time the record was created
    pub uploaded_at: DateTime<Utc>,

    /// Summary of the uploaded table
    pub summary: Summary,
}
