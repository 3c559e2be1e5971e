//! Catch Log Library
//!
//! A Rust library for turning a fishing log (one row per catch) into
//! per-species "best conditions" recommendations.
//!
//! This library provides tools for:
//! - Parsing catch-log CSV exports with inconsistent header spellings
//! - Filtering out rows that cannot be attributed to a species
//! - Aggregating catches by location, bait, moon, tide, time of day and weather
//! - Ranking each dimension by catch frequency with an average-weight tie-break
//! - Caching the last loaded dataset and user preferences for offline use

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod catch_csv_parser;
        pub mod snapshot_cache;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
    pub mod species_select;
}

// Re-export commonly used types
pub use app::models::{CatchRecord, DimensionStat, RecommendationSummary, WeightUnit};
pub use config::Config;

/// Result type alias for the catch log library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ingestion, caching and configuration
///
/// The analytics engine itself never fails; these cover everything around it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Catch-log layout error (e.g. no species column)
    #[error("Catch log format error in '{file}': {message}")]
    CsvFormat { file: String, message: String },

    /// JSON (de)serialization of the snapshot or preference files failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file '{path}'")]
    ConfigParsing {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Neither the source nor the snapshot cache could provide records
    #[error("No catch data available: {message}")]
    NoData { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a catch-log format error
    pub fn csv_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CsvFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration file parsing error
    pub fn config_parsing(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParsing {
            path: path.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a no-data error
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParsing {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
