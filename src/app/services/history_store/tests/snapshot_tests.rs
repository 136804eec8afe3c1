//! Tests for snapshot and restore

use super::*;
use crate::Error;
use crate::app::models::DatasetRecord;
use crate::app::services::history_store::{HistorySnapshot, HistoryStore};

fn record(id: u64, seconds: i64) -> DatasetRecord {
    DatasetRecord {
        id,
        filename: format!("file-{id}.csv"),
        uploaded_at: StepClock::reading(seconds),
        summary: create_test_summary(1),
    }
}

#[test]
fn test_snapshot_round_trip_preserves_order_and_counter() {
    let store = HistoryStore::new().with_clock(StepClock::new());
    for n in 1..=3 {
        store.insert(create_test_dataset(n));
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.next_id, 4);
    assert_eq!(snapshot.records[0].filename, "upload-3.csv");

    let restored = HistoryStore::from_snapshot(snapshot.clone(), 5).unwrap();
    assert_eq!(restored.snapshot(), snapshot);
}

#[test]
fn test_restore_evicts_beyond_capacity() {
    let snapshot = HistorySnapshot {
        next_id: 10,
        records: vec![record(3, 30), record(1, 10), record(2, 20)],
    };

    let store = HistoryStore::from_snapshot(snapshot, 2).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.get(1).is_err());
}

#[test]
fn test_restore_never_reuses_ids() {
    let snapshot = HistorySnapshot {
        next_id: 0,
        records: vec![record(7, 0)],
    };

    let store = HistoryStore::from_snapshot(snapshot, 5)
        .unwrap()
        .with_clock(StepClock::new());
    assert_eq!(store.insert(create_test_dataset(1)), 8);
}

#[test]
fn test_restore_rejects_duplicate_ids() {
    let snapshot = HistorySnapshot {
        next_id: 3,
        records: vec![record(1, 0), record(1, 5)],
    };

    assert!(matches!(
        HistoryStore::from_snapshot(snapshot, 5),
        Err(Error::DataValidation { .. })
    ));
}
