//! JSON file persistence for the history store
//!
//! Stands in for a database: the whole store is loaded at start-up and
//! written back after each change. Writes go to a temporary sibling file
//! which is then renamed over the target, so a crash never leaves a
//! half-written history behind.

use crate::app::services::history_store::{HistorySnapshot, HistoryStore};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load a history store from `path`, or an empty store if the file is absent
pub fn load_history(path: &Path, capacity: usize) -> Result<HistoryStore> {
    if !path.exists() {
        info!(
            "No history file at {}, starting with an empty history",
            path.display()
        );
        return HistoryStore::with_capacity(capacity);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read history file {}", path.display()), e))?;

    let snapshot: HistorySnapshot = serde_json::from_str(&content).map_err(|e| {
        Error::json(
            format!("Failed to parse history file {}", path.display()),
            e,
        )
    })?;

    debug!(
        "Loaded {} history records from {}",
        snapshot.len(),
        path.display()
    );
    HistoryStore::from_snapshot(snapshot, capacity)
}

/// Write the store's snapshot to `path`, creating parent directories
pub fn save_history(path: &Path, store: &HistoryStore) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create history directory {}", parent.display()),
                e,
            )
        })?;
    }

    let snapshot = store.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| Error::json("Failed to serialize history", e))?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json).map_err(|e| {
        Error::io(
            format!("Failed to write history file {}", temp_path.display()),
            e,
        )
    })?;
    fs::rename(&temp_path, path).map_err(|e| {
        Error::io(
            format!("Failed to replace history file {}", path.display()),
            e,
        )
    })?;

    debug!(
        "Saved {} history records to {}",
        snapshot.len(),
        path.display()
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
