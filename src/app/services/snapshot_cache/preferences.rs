//! Small persistent key/value store for user preferences

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::storage::{read_json, write_json_atomically};
use crate::constants::PREFERENCES_FILE_NAME;
use crate::{Error, Result};

/// Stored value with its last modification time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub value: Value,
    pub updated_at: DateTime<Utc>,
}

/// `user-preferences.json` in the cache directory
///
/// Every call reads the file afresh; there is no in-memory copy to go stale.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(cache_dir: impl AsRef<Path>) -> Self {
        Self {
            path: cache_dir.as_ref().join(PREFERENCES_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored preferences, keyed by name
    pub fn entries(&self) -> Result<BTreeMap<String, PreferenceEntry>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries()?.remove(key).map(|entry| entry.value))
    }

    /// String preference; non-string values are treated as absent
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .get(key)?
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::serialization(format!("Failed to encode preference '{}'", key), e))?;

        let mut entries = self.entries()?;
        entries.insert(
            key.to_string(),
            PreferenceEntry {
                value,
                updated_at: Utc::now(),
            },
        );
        write_json_atomically(&self.path, &entries)?;
        debug!("Saved preference '{}'", key);
        Ok(())
    }

    /// Delete a preference; `true` if it was set
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        write_json_atomically(&self.path, &entries)?;
        debug!("Removed preference '{}'", key);
        Ok(true)
    }
}
