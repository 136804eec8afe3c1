//! Tests for the report renderer module


use crate::app::models::{Averages, DatasetRecord, Summary, TypeDistribution};
use chrono::{TimeZone, Utc};

/// Lines before the first distribution entry
pub const HEADER_LINES: usize = 10;

/// A stored record whose distribution has `types` entries with descending counts
pub fn create_test_record(types: usize) -> DatasetRecord {
    let counts: Vec<(String, usize)> = (0..types)
        .map(|i| (format!("Type-{:02}", i), types - i))
        .collect();
    let total = counts.iter().map(|(_, count)| count).sum();

    DatasetRecord {
        id: 7,
        filename: "plant-a.csv".to_string(),
        uploaded_at: Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 5).unwrap(),
        summary: Summary {
            total_equipment: total,
            averages: Averages {
                flowrate: 20.0,
                pressure: 123.456,
                temperature: 1.0 / 3.0,
            },
            type_distribution: TypeDistribution::from_ordered_counts(counts),
        },
    }
}
