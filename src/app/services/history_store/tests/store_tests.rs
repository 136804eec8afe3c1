//! Tests for basic history store operations

use super::*;
use crate::Error;
use crate::app::services::history_store::HistoryStore;

fn create_store() -> HistoryStore {
    HistoryStore::new().with_clock(StepClock::new())
}

#[test]
fn test_new_store_is_empty() {
    let store = HistoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.capacity(), 5);
    assert!(store.list_recent(5).is_empty());
}

#[test]
fn test_insert_assigns_increasing_ids_and_timestamps() {
    let store = create_store();

    let first = store.insert(create_test_dataset(1));
    let second = store.insert(create_test_dataset(2));
    assert!(second > first);

    let a = store.get(first).unwrap();
    let b = store.get(second).unwrap();
    assert_eq!(a.filename, "upload-1.csv");
    assert_eq!(a.uploaded_at, StepClock::reading(0));
    assert_eq!(b.uploaded_at, StepClock::reading(1));
    assert_eq!(b.summary.total_equipment, 2);
}

#[test]
fn test_get_unknown_id_is_not_found() {
    let store = create_store();
    store.insert(create_test_dataset(1));

    match store.get(42) {
        Err(Error::NotFound { id }) => assert_eq!(id, 42),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_list_recent_newest_first_and_limited() {
    let store = create_store();
    for n in 1..=4 {
        store.insert(create_test_dataset(n));
    }

    let names: Vec<String> = store
        .list_recent(3)
        .into_iter()
        .map(|record| record.filename)
        .collect();
    assert_eq!(names, vec!["upload-4.csv", "upload-3.csv", "upload-2.csv"]);

    let all = store.list_recent(5);
    assert_eq!(all.len(), 4);
    assert!(
        all.windows(2)
            .all(|pair| pair[0].uploaded_at > pair[1].uploaded_at)
    );
}

#[test]
fn test_delete_by_id() {
    let store = create_store();
    let keep = store.insert(create_test_dataset(1));
    let removed_id = store.insert(create_test_dataset(2));

    let removed = store.delete(removed_id).unwrap();
    assert_eq!(removed.id, removed_id);
    assert_eq!(store.len(), 1);
    assert!(store.get(keep).is_ok());
    assert!(matches!(store.delete(removed_id), Err(Error::NotFound { .. })));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let store = create_store();
    let first = store.insert(create_test_dataset(1));
    store.delete(first).unwrap();

    let second = store.insert(create_test_dataset(2));
    assert_ne!(first, second);
}

#[test]
fn test_with_capacity_validation() {
    assert!(matches!(
        HistoryStore::with_capacity(0),
        Err(Error::Configuration { .. })
    ));
    assert!(HistoryStore::with_capacity(100_000).is_err());
    assert_eq!(HistoryStore::with_capacity(2).unwrap().capacity(), 2);
}
