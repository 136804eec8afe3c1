//! History store implementation

use super::clock::{Clock, SystemClock};
use super::snapshot::HistorySnapshot;
use crate::app::models::{DatasetRecord, NewDataset};
use crate::constants::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
use crate::{Error, Result};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Most-recent-N store of dataset records
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    clock: Box<dyn Clock>,
    state: Mutex<HistoryState>,
}

#[derive(Debug)]
struct HistoryState {
    next_id: u64,
    records: Vec<DatasetRecord>,
}

impl HistoryState {
    fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Remove the record with the oldest upload time, earliest id on ties
    fn remove_oldest(&mut self) -> Option<DatasetRecord> {
        let index = self
            .records
            .iter()
            .enumerate()
            .min_by_key(|(_, record)| (record.uploaded_at, record.id))
            .map(|(index, _)| index)?;
        Some(self.records.remove(index))
    }

    fn evict_over(&mut self, capacity: usize) -> Vec<DatasetRecord> {
        let mut evicted = Vec::new();
        while self.records.len() > capacity {
            match self.remove_oldest() {
                Some(record) => evicted.push(record),
                None => break,
            }
        }
        evicted
    }

    /// Records ordered newest first
    fn newest_first(&self) -> Vec<DatasetRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| (b.uploaded_at, b.id).cmp(&(a.uploaded_at, a.id)));
        records
    }
}

impl HistoryStore {
    /// Create an empty store with the default capacity and the system clock
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            clock: Box::new(SystemClock),
            state: Mutex::new(HistoryState::new()),
        }
    }

    /// Create an empty store with a custom capacity
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            capacity,
            ..Self::new()
        })
    }

    /// Restore a store from a snapshot
    ///
    /// Records beyond `capacity` are evicted oldest first. The id counter
    /// never falls back below an id already handed out.
    pub fn from_snapshot(snapshot: HistorySnapshot, capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;

        let mut seen = HashSet::new();
        for record in &snapshot.records {
            if record.id == 0 || !seen.insert(record.id) {
                return Err(Error::data_validation(format!(
                    "History snapshot has an invalid or duplicate record id {}",
                    record.id
                )));
            }
        }

        let max_id = snapshot.records.iter().map(|r| r.id).max().unwrap_or(0);
        let mut state = HistoryState {
            next_id: snapshot.next_id.max(max_id + 1).max(1),
            records: snapshot.records,
        };

        let evicted = state.evict_over(capacity);
        if !evicted.is_empty() {
            info!(
                "Evicted {} records while restoring history (capacity {})",
                evicted.len(),
                capacity
            );
        }

        debug!(
            "Restored history with {} records, next id {}",
            state.records.len(),
            state.next_id
        );

        Ok(Self {
            capacity,
            clock: Box::new(SystemClock),
            state: Mutex::new(state),
        })
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Maximum number of records retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store a new dataset and return its id
    ///
    /// Id assignment, timestamping, the append and any eviction happen under
    /// one lock.
    pub fn insert(&self, dataset: NewDataset) -> u64 {
        let mut state = self.lock();

        let id = state.next_id;
        state.next_id += 1;

        let record = DatasetRecord {
            id,
            filename: dataset.filename,
            uploaded_at: self.clock.now(),
            summary: dataset.summary,
        };
        debug!("Inserting dataset {} ({})", id, record.filename);
        state.records.push(record);

        for evicted in state.evict_over(self.capacity) {
            info!(
                "Evicted dataset {} ({}) uploaded at {}",
                evicted.id, evicted.filename, evicted.uploaded_at
            );
        }

        id
    }

    /// Up to `n` records, most recent upload first
    pub fn list_recent(&self, n: usize) -> Vec<DatasetRecord> {
        let mut records = self.lock().newest_first();
        records.truncate(n);
        records
    }

    /// Look up a record by id
    ///
    /// Ids may go stale: a record can be evicted between listing and lookup.
    pub fn get(&self, id: u64) -> Result<DatasetRecord> {
        self.lock()
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Delete a record by id
    pub fn delete(&self, id: u64) -> Result<DatasetRecord> {
        let mut state = self.lock();
        let index = state
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| Error::not_found(id))?;

        let removed = state.records.remove(index);
        info!("Deleted dataset {} ({})", removed.id, removed.filename);
        Ok(removed)
    }

    /// Delete the oldest record; a no-op on an empty store
    pub fn delete_oldest(&self) -> Option<DatasetRecord> {
        self.lock().remove_oldest()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Serializable copy of the current state
    pub fn snapshot(&self) -> HistorySnapshot {
        let state = self.lock();
        HistorySnapshot {
            next_id: state.next_id,
            records: state.newest_first(),
        }
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(Error::configuration(
            "History capacity must be greater than 0",
        ));
    }

    if capacity > MAX_HISTORY_CAPACITY {
        return Err(Error::configuration(format!(
            "History capacity cannot exceed {}",
            MAX_HISTORY_CAPACITY
        )));
    }

    Ok(())
}
