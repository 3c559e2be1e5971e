//! Application constants for the catch log
//!
//! This module contains unit conversions, bucket boundaries, default labels,
//! and the header alias table used when reading catch-log exports.

// =============================================================================
// Units
// =============================================================================

/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

// =============================================================================
// Default Labels
// =============================================================================

/// Value used for categorical fields that were absent in the source row
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Grouping label for catches recorded without a bait enhancement
pub const NO_ENHANCEMENT_LABEL: &str = "None";

// =============================================================================
// Bucket Boundaries
// =============================================================================

/// Hour boundaries for time-of-day buckets (half-open on the hour)
pub mod time_buckets {
    pub const MORNING_START: u32 = 5;
    pub const AFTERNOON_START: u32 = 12;
    pub const EVENING_START: u32 = 17;
    pub const NIGHT_START: u32 = 20;

    /// Highest valid hour of day
    pub const MAX_HOUR: u32 = 23;
}

/// Cloud cover boundaries (percent) for weather buckets
pub mod weather_buckets {
    pub const PARTLY_CLOUDY_MIN: f64 = 30.0;
    pub const OVERCAST_MIN: f64 = 60.0;
}

/// Valid range for cloud cover readings, used for data quality reporting only
pub const CLOUD_COVER_RANGE: (f64, f64) = (0.0, 100.0);

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Number of ranked values kept per dimension in a summary
pub const DEFAULT_TOP_N: usize = 3;

/// Upper bound accepted for `top_n`
pub const MAX_TOP_N: usize = 50;

/// Age after which the cached snapshot is reported as stale
pub const DEFAULT_MAX_CACHE_AGE_HOURS: u64 = 24;

// =============================================================================
// Cache Files
// =============================================================================

/// Application directory name under the platform cache/config directories
pub const APP_DIR_NAME: &str = "catchlog";

/// Snapshot of the last successfully loaded dataset
pub const SNAPSHOT_FILE_NAME: &str = "fishing-data.json";

/// Key/value store for user preferences
pub const PREFERENCES_FILE_NAME: &str = "user-preferences.json";

/// Configuration file name under the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preference key for the last species the user asked about
pub const PREF_SELECTED_SPECIES: &str = "selected_species";

// =============================================================================
// Environment Variables
// =============================================================================

pub mod env_vars {
    pub const INPUT: &str = "CATCHLOG_INPUT";
    pub const CACHE_DIR: &str = "CATCHLOG_CACHE_DIR";
    pub const OFFLINE: &str = "CATCHLOG_OFFLINE";
}

// =============================================================================
// Column Aliases
// =============================================================================

/// Known raw header spellings for each canonical catch field
///
/// Headers are matched after trimming and lowercasing, so trailing spaces and
/// capitalisation differences in spreadsheet exports resolve to the same field.
pub mod column_aliases {
    pub const SPECIES: &[&str] = &["species"];
    pub const WEIGHT_LBS: &[&str] = &["weight (lbs)", "weightlbs", "weight_lbs", "weight lbs"];
    pub const WEIGHT_KG: &[&str] = &["weight (kg)", "weight", "weightkg", "weight_kg"];
    pub const PLACE: &[&str] = &["place", "location"];
    pub const PRIMARY_BAIT: &[&str] = &["primary_bait", "primarybait", "primary bait", "bait"];
    pub const ENHANCEMENT: &[&str] = &["enhancement"];
    pub const WATER_TEMP: &[&str] = &[
        "water temperature (°c)",
        "water temperature (c)",
        "water temperature",
        "watertemp",
    ];
    pub const MOON: &[&str] = &["moon", "moon phase"];
    pub const TIDE_STATE: &[&str] = &["tide state", "tidestate", "tide_state", "tide"];
    pub const TIME_OF_STRIKE: &[&str] = &["time of strike", "timeofstrike", "time_of_strike", "time"];
    pub const WEATHER: &[&str] = &["weather"];
    pub const CLOUD_COVER: &[&str] = &["cloud cover (%)", "cloud cover", "cloudcover"];
    pub const TIDE_HEIGHT: &[&str] = &["tide height (m)", "tide height", "tideheight"];
    pub const TIDAL_COEFF: &[&str] = &["tidal coefficient", "tidalcoeff", "tidal coeff"];
    pub const LENGTH: &[&str] = &["length (m)", "length"];
    pub const LINE_LBS: &[&str] = &["line (lbs)", "linelbs", "line lbs"];
    pub const AIR_TEMP: &[&str] = &["air temp (°c)", "air temp (c)", "air temp", "airtemp"];
}
