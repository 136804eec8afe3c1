//! Bounded history of analyzed uploads
//!
//! The store keeps the most recent dataset records up to a fixed capacity
//! (five by default). Inserting past capacity evicts the record with the
//! oldest upload time, ties going to the earliest inserted record.
//!
//! # Architecture
//!
//! - [`store`] - The [`HistoryStore`] and its serialized insert-then-evict step
//! - [`clock`] - Time source used to stamp `uploaded_at`
//! - [`snapshot`] - Serializable view used to persist and restore the store
//!
//! # Concurrency
//!
//! All state sits behind a single mutex. An insert assigns the id, stamps the
//! time, appends and evicts under one guard, so no caller ever observes more
//! than `capacity` records or an eviction of anything but the oldest record.
//!
//! # Example Usage
//!
//! ```rust
//! use equipment_analyzer::app::models::NewDataset;
//! use equipment_analyzer::{HistoryStore, analyze_csv};
//!
//! # fn example() -> equipment_analyzer::Result<()> {
//! let csv = "Equipment Name,Type,Flowrate,Pressure,Temperature\nP-1,Pump,10,2,80\n";
//! let analysis = analyze_csv(csv.as_bytes(), "plant.csv")?;
//!
//! let store = HistoryStore::new();
//! let id = store.insert(NewDataset::new("plant.csv", analysis.summary));
//! assert_eq!(store.get(id)?.filename, "plant.csv");
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod snapshot;
pub mod store;

#[cfg(test)]
pub mod tests;

pub use clock::{Clock, SystemClock};
pub use snapshot::HistorySnapshot;
pub use store::HistoryStore;
