//! Delimited table reading for equipment uploads
//!
//! Reads a CSV byte stream with a header row into a [`RawTable`]. No column
//! names are interpreted here; that is the schema validator's job.

use crate::app::models::RawTable;
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a CSV stream with a header row
///
/// `source_name` is only used to give errors and logs some context, usually
/// the uploaded file name. Rows may have differing lengths; missing trailing
/// cells read as empty.
pub fn read_table<R: Read>(reader: R, source_name: &str) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(source_name, "Failed to read CSV headers", Some(e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(
                source_name,
                format!("Failed to read record {}", index + 1),
                Some(e),
            )
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        "Read {} columns and {} records from {}",
        columns.len(),
        records.len(),
        source_name
    );

    Ok(RawTable::new(columns, records))
}

/// Read a CSV file from disk
pub fn read_table_from_path(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    read_table(file, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_headers_and_records() {
        let data = "Equipment Name,Type,Flowrate\nP-101,Pump,12.5\nV-201,Valve,3\n";
        let table = read_table(data.as_bytes(), "sample.csv").unwrap();

        assert_eq!(table.columns, vec!["Equipment Name", "Type", "Flowrate"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.records[1], vec!["V-201", "Valve", "3"]);
    }

    #[test]
    fn test_read_table_allows_ragged_rows() {
        let data = "a,b,c\n1,2\n1,2,3,4\n";
        let table = read_table(data.as_bytes(), "ragged.csv").unwrap();

        assert_eq!(table.records[0].len(), 2);
        assert_eq!(table.records[1].len(), 4);
    }

    #[test]
    fn test_read_table_header_only() {
        let table = read_table("a,b\n".as_bytes(), "empty.csv").unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_read_table_invalid_utf8_is_csv_error() {
        let data: &[u8] = b"name,type\n\xff\xfe,Pump\n";
        let error = read_table(data, "binary.csv").unwrap_err();
        assert!(matches!(error, Error::CsvParsing { .. }));
    }

    #[test]
    fn test_read_table_from_missing_path() {
        let error = read_table_from_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }
}
