//! JSON file helpers shared by the snapshot cache and the preference store

use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Read and deserialize a JSON file, `None` if it does not exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::io(format!("Failed to read {}", path.display()), e));
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::serialization(format!("Corrupt JSON in {}", path.display()), e))
}

/// Serialize to a temp file in the target directory, then rename over the target
///
/// Readers see either the old file or the new one, never a partial write.
pub fn write_json_atomically<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&parent).map_err(|e| {
        Error::io(format!("Failed to create directory {}", parent.display()), e)
    })?;

    let json = serde_json::to_vec_pretty(value).map_err(|e| {
        Error::serialization(format!("Failed to serialize {}", path.display()), e)
    })?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| {
        Error::io(format!("Failed to create temp file in {}", parent.display()), e)
    })?;
    tmp.write_all(&json)
        .and_then(|_| tmp.flush())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| Error::io(format!("Failed to write temp file for {}", path.display()), e))?;
    tmp.persist(path)
        .map_err(|e| Error::io(format!("Failed to replace {}", path.display()), e.error))?;

    Ok(())
}

/// Delete a file, reporting whether it existed
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(format!("Failed to remove {}", path.display()), e)),
    }
}
