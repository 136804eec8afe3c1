//! Upload analysis pipeline
//!
//! Composes the table reader, schema validator and summarizer:
//! raw bytes -> [`RawTable`] -> [`NormalizedTable`] -> [`Analysis`].
//!
//! [`NormalizedTable`]: crate::app::models::NormalizedTable

use crate::Result;
use crate::app::models::{Analysis, RawTable};
use crate::app::services::schema_validator::validate_schema;
use crate::app::services::summarizer::summarize;
use crate::app::services::table_reader::{read_table, read_table_from_path};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Analyze a CSV stream
pub fn analyze_csv<R: Read>(reader: R, source_name: &str) -> Result<Analysis> {
    let table = read_table(reader, source_name)?;
    let analysis = analyze_table(table)?;

    info!(
        "Analyzed {}: {} equipment rows, {} types",
        source_name,
        analysis.summary.total_equipment,
        analysis.summary.type_distribution.len()
    );
    Ok(analysis)
}

/// Analyze a CSV file on disk
pub fn analyze_path(path: &Path) -> Result<Analysis> {
    let table = read_table_from_path(path)?;
    let analysis = analyze_table(table)?;

    info!(
        "Analyzed {}: {} equipment rows",
        path.display(),
        analysis.summary.total_equipment
    );
    Ok(analysis)
}

/// Validate and summarize an already-parsed table
pub fn analyze_table(table: RawTable) -> Result<Analysis> {
    let normalized = validate_schema(table)?;
    summarize(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const VALID_CSV: &str = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
Pump-1,Pump,120,5.2,110
Pump-2,Pump,130,5.6,115
Valve-1,Valve,60,4.1,105
HX-1,HeatExchanger,150,6.2,130
";

    #[test]
    fn test_analyze_csv_end_to_end() {
        let analysis = analyze_csv(VALID_CSV.as_bytes(), "equipment.csv").unwrap();

        assert_eq!(analysis.summary.total_equipment, 4);
        assert_eq!(analysis.summary.averages.flowrate, 115.0);
        assert_eq!(
            analysis.summary.type_distribution.chart.labels,
            vec!["Pump", "Valve", "HeatExchanger"]
        );
        assert_eq!(analysis.rows.len(), 4);
    }

    #[test]
    fn test_analyze_csv_schema_error_before_empty_check() {
        let error = analyze_csv("name,type\n".as_bytes(), "bad.csv").unwrap_err();
        assert!(matches!(error, Error::Schema { ref column } if column == "equipment name"));
    }

    #[test]
    fn test_analyze_csv_header_only_is_empty_dataset() {
        let data = "equipment name,type,flowrate,pressure,temperature\n";
        let error = analyze_csv(data.as_bytes(), "empty.csv").unwrap_err();
        assert!(matches!(error, Error::EmptyDataset));
        assert!(error.is_data_error());
    }

    #[test]
    fn test_analyze_table_from_raw_parts() {
        let table = RawTable::new(
            vec![
                "EQUIPMENT NAME".into(),
                "type".into(),
                "flowrate".into(),
                "pressure".into(),
                "temperature".into(),
            ],
            vec![vec![
                "C-1".into(),
                "Compressor".into(),
                "1".into(),
                "2".into(),
                "3".into(),
            ]],
        );

        let analysis = analyze_table(table).unwrap();
        assert_eq!(analysis.summary.total_equipment, 1);
        assert_eq!(analysis.summary.type_distribution.raw["Compressor"], 1);
    }
}
