//! Offline persistence: dataset snapshot and user preferences
//!
//! Two JSON files live in the cache directory:
//! - `fishing-data.json` holds the last dataset read from the source
//! - `user-preferences.json` holds small key/value settings such as the
//!   last selected species
//!
//! [`DataSource`] ties the snapshot to the CSV parser and decides which one
//! a run reads from.
//!
//! ## Usage
//!
//! ```rust
//! use catchlog::app::services::snapshot_cache::SnapshotCache;
//! use catchlog::CatchRecord;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let cache = SnapshotCache::new(dir.path());
//!
//! cache.save(&[CatchRecord::new("Sailfish")], "catches.csv")?;
//! let snapshot = cache.load()?.unwrap();
//! assert_eq!(snapshot.records.len(), 1);
//! # Ok::<(), catchlog::Error>(())
//! ```

pub mod cache;
pub mod preferences;
pub mod source;
pub mod storage;

#[cfg(test)]
pub mod tests;

pub use cache::{Snapshot, SnapshotCache};
pub use preferences::{PreferenceEntry, PreferenceStore};
pub use source::{DataSource, DatasetOrigin, LoadedDataset};
