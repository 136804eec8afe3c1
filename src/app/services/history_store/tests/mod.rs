//! Tests for the history store module

pub mod snapshot_tests;
pub mod store_tests;

use super::clock::Clock;
use crate::app::models::{Averages, NewDataset, Summary, TypeDistribution};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second on every reading
#[derive(Debug)]
pub struct StepClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            base: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }

    /// Time that the nth reading (0-based) returns
    pub fn reading(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::seconds(n)
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

/// Clock that always returns the same instant
#[derive(Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A minimal valid summary
pub fn create_test_summary(total_equipment: usize) -> Summary {
    Summary {
        total_equipment,
        averages: Averages {
            flowrate: 10.0,
            pressure: 5.0,
            temperature: 80.0,
        },
        type_distribution: TypeDistribution::from_ordered_counts(vec![(
            "Pump".to_string(),
            total_equipment,
        )]),
    }
}

/// A new dataset named `upload-<n>.csv`
pub fn create_test_dataset(n: usize) -> NewDataset {
    NewDataset::new(format!("upload-{n}.csv"), create_test_summary(n))
}
