//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! environment variables, then command-line flags (applied by the CLI).

use crate::app::models::WeightUnit;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_CACHE_AGE_HOURS, DEFAULT_TOP_N, MAX_TOP_N,
    env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Where catch data comes from and where the offline copy lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Catch-log CSV export
    pub input_path: Option<PathBuf>,

    /// Directory holding the snapshot and preference files
    pub cache_dir: PathBuf,

    /// Read the snapshot without touching the source
    pub offline: bool,

    /// Snapshot age (hours) after which a staleness warning is logged
    pub max_cache_age_hours: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            cache_dir: default_cache_dir(),
            offline: false,
            max_cache_age_hours: DEFAULT_MAX_CACHE_AGE_HOURS,
        }
    }
}

/// Recommendation engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Unit for every weight statistic
    pub weight_unit: WeightUnit,

    /// Ranked values kept per dimension
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Kilograms,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    pub fn with_weight_unit(mut self, unit: WeightUnit) -> Self {
        self.weight_unit = unit;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

impl Config {
    /// Default location of the configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parsing(origin, e))
    }

    /// Build configuration from defaults, an optional file, and the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(env_vars::INPUT).filter(|v| !v.trim().is_empty()) {
            self.data.input_path = Some(PathBuf::from(input.trim()));
        }
        if let Some(cache_dir) = lookup(env_vars::CACHE_DIR).filter(|v| !v.trim().is_empty()) {
            self.data.cache_dir = PathBuf::from(cache_dir.trim());
        }
        if let Some(offline) = lookup(env_vars::OFFLINE) {
            self.data.offline = parse_bool_flag(env_vars::OFFLINE, &offline)?;
        }
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.analysis.top_n == 0 || self.analysis.top_n > MAX_TOP_N {
            return Err(Error::configuration(format!(
                "top_n must be between 1 and {}, got {}",
                MAX_TOP_N, self.analysis.top_n
            )));
        }

        if self.data.cache_dir.as_os_str().is_empty() {
            return Err(Error::configuration("cache_dir cannot be empty"));
        }

        if let Some(input) = &self.data.input_path {
            if input.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, expected a CSV file: {}",
                    input.display()
                )));
            }
        }

        Ok(())
    }
}

fn parse_bool_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::configuration(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
