//! Snapshot of the last successfully loaded dataset

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::storage::{read_json, remove_if_exists, write_json_atomically};
use crate::Result;
use crate::app::models::CatchRecord;
use crate::constants::SNAPSHOT_FILE_NAME;

/// Cached dataset plus where and when it was captured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Path or label of the source the records were read from
    pub source: String,
    pub saved_at: DateTime<Utc>,
    pub records: Vec<CatchRecord>,
}

impl Snapshot {
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.saved_at
    }
}

/// Only the timestamp, so status checks skip record deserialization
#[derive(Deserialize)]
struct SnapshotHeader {
    saved_at: DateTime<Utc>,
}

/// File-backed snapshot store (`fishing-data.json` in the cache directory)
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    pub fn new(cache_dir: impl AsRef<Path>) -> Self {
        Self {
            path: cache_dir.as_ref().join(SNAPSHOT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replace the snapshot with the given records
    pub fn save(&self, records: &[CatchRecord], source: &str) -> Result<Snapshot> {
        let snapshot = Snapshot {
            source: source.to_string(),
            saved_at: Utc::now(),
            records: records.to_vec(),
        };

        write_json_atomically(&self.path, &snapshot)?;
        info!(
            "Cached {} records from {} to {}",
            snapshot.records.len(),
            source,
            self.path.display()
        );

        Ok(snapshot)
    }

    /// Current snapshot, `None` when nothing has been cached
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let snapshot: Option<Snapshot> = read_json(&self.path)?;
        match &snapshot {
            Some(s) => debug!("Loaded snapshot of {} records from {}", s.records.len(), s.source),
            None => debug!("No snapshot at {}", self.path.display()),
        }
        Ok(snapshot)
    }

    /// When the snapshot was written, `None` when nothing has been cached
    pub fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        let header: Option<SnapshotHeader> = read_json(&self.path)?;
        Ok(header.map(|h| h.saved_at))
    }

    /// Remove the snapshot; `true` if there was one
    pub fn invalidate(&self) -> Result<bool> {
        let removed = remove_if_exists(&self.path)?;
        if removed {
            info!("Invalidated snapshot {}", self.path.display());
        }
        Ok(removed)
    }

    /// Missing snapshots count as stale
    pub fn is_stale(&self, max_age: Duration) -> Result<bool> {
        Ok(match self.last_updated()? {
            Some(saved_at) => Utc::now() - saved_at > max_age,
            None => true,
        })
    }
}

/// Convert a configured age in hours, clamped to a century
pub fn max_age_from_hours(hours: u64) -> Duration {
    const MAX_HOURS: u64 = 100 * 365 * 24;
    Duration::hours(hours.min(MAX_HOURS) as i64)
}
