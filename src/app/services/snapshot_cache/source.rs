//! Dataset lifecycle: read the source, keep the snapshot current, fall back to it
//!
//! The snapshot is populated on every successful read of the source. Offline
//! mode reads the snapshot before the source is ever touched; otherwise the
//! snapshot is only used when the source cannot be read.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::cache::{SnapshotCache, max_age_from_hours};
use crate::app::models::CatchRecord;
use crate::app::services::catch_csv_parser::{CatchCsvParser, ParseResult, ParseStats};
use crate::config::DataConfig;
use crate::{Error, Result};

/// Where a loaded dataset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetOrigin {
    Source,
    Cache,
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetOrigin::Source => f.write_str("source"),
            DatasetOrigin::Cache => f.write_str("cache"),
        }
    }
}

/// Records ready for analysis, with provenance
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<CatchRecord>,
    pub origin: DatasetOrigin,
    /// Snapshot time; `None` when the source was read but caching failed
    pub saved_at: Option<DateTime<Utc>>,
    /// Present when the records were parsed from the source in this run
    pub parse_stats: Option<ParseStats>,
}

/// Loads catch data according to the data configuration
#[derive(Debug, Clone)]
pub struct DataSource {
    parser: CatchCsvParser,
    cache: SnapshotCache,
    input_path: Option<PathBuf>,
    offline: bool,
    max_cache_age: Duration,
}

impl DataSource {
    pub fn new(config: &DataConfig) -> Self {
        Self {
            parser: CatchCsvParser::new(),
            cache: SnapshotCache::new(&config.cache_dir),
            input_path: config.input_path.clone(),
            offline: config.offline,
            max_cache_age: max_age_from_hours(config.max_cache_age_hours),
        }
    }

    pub fn with_parser(mut self, parser: CatchCsvParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Load the dataset, preferring the source unless running offline
    pub fn load(&self) -> Result<LoadedDataset> {
        if self.offline {
            info!("Offline mode: reading cached snapshot");
            return self.load_from_cache();
        }

        let Some(path) = self.input_path.as_deref() else {
            warn!("No input file configured, using cached snapshot");
            return self.fall_back_to_cache(|| {
                "no input file configured and no usable cached snapshot; pass --input <CSV>"
                    .to_string()
            });
        };

        match self.load_from_source(path) {
            Ok(dataset) => Ok(dataset),
            Err(source_error) => {
                warn!(
                    "Could not read {} ({}), falling back to cached snapshot",
                    path.display(),
                    source_error
                );
                self.fall_back_to_cache(|| {
                    format!(
                        "{} is unreadable ({}) and no usable snapshot is cached",
                        path.display(),
                        source_error
                    )
                })
            }
        }
    }

    /// Re-read the source and replace the snapshot; no fallback
    ///
    /// The existing snapshot is only dropped once the source has parsed.
    pub fn refresh(&self) -> Result<LoadedDataset> {
        if self.offline {
            return Err(Error::configuration("cannot refresh in offline mode"));
        }
        let path = self
            .input_path
            .as_deref()
            .ok_or_else(|| Error::configuration("refresh requires an input file (--input)"))?;

        let result = self.parser.parse_file(path)?;
        self.cache.invalidate()?;
        Ok(self.store(result, path))
    }

    fn load_from_source(&self, path: &Path) -> Result<LoadedDataset> {
        let result = self.parser.parse_file(path)?;
        Ok(self.store(result, path))
    }

    /// Save parsed records as the new snapshot
    fn store(&self, result: ParseResult, path: &Path) -> LoadedDataset {
        // A failed cache write costs the offline copy, not this run
        let saved_at = match self.cache.save(&result.records, &path.display().to_string()) {
            Ok(snapshot) => Some(snapshot.saved_at),
            Err(e) => {
                warn!("Could not update snapshot cache: {}", e);
                None
            }
        };

        LoadedDataset {
            records: result.records,
            origin: DatasetOrigin::Source,
            saved_at,
            parse_stats: Some(result.stats),
        }
    }

    /// Read the snapshot when the source is unavailable
    ///
    /// A missing or corrupt snapshot is reported as `NoData` carrying the
    /// reason the source could not be used.
    fn fall_back_to_cache<F>(&self, unavailable: F) -> Result<LoadedDataset>
    where
        F: FnOnce() -> String,
    {
        self.load_from_cache().map_err(|cache_error| match cache_error {
            Error::NoData { .. } => Error::no_data(unavailable()),
            Error::Serialization { .. } => {
                warn!("Cached snapshot is unusable: {}", cache_error);
                Error::no_data(unavailable())
            }
            other => other,
        })
    }

    fn load_from_cache(&self) -> Result<LoadedDataset> {
        let snapshot = self.cache.load()?.ok_or_else(|| {
            Error::no_data(format!("no snapshot at {}", self.cache.path().display()))
        })?;

        if snapshot.age(Utc::now()) > self.max_cache_age {
            warn!(
                "Cached snapshot from {} is older than {} hours",
                snapshot.saved_at.format("%Y-%m-%d %H:%M UTC"),
                self.max_cache_age.num_hours()
            );
        }

        info!(
            "Using {} cached records from {}",
            snapshot.records.len(),
            snapshot.source
        );

        Ok(LoadedDataset {
            records: snapshot.records,
            origin: DatasetOrigin::Cache,
            saved_at: Some(snapshot.saved_at),
            parse_stats: None,
        })
    }
}
