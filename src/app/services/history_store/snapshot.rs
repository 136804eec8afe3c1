//! Serializable view of the history store

use crate::app::models::DatasetRecord;
use serde::{Deserialize, Serialize};

/// Records plus the id counter, enough to restore a store exactly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Next id the store will assign
    pub next_id: u64,

    /// Stored records, most recent first
    pub records: Vec<DatasetRecord>,
}

impl HistorySnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
