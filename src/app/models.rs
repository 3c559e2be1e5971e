//! Core data structures for catch-log analysis
//!
//! Defines the canonical catch record produced by ingestion, the per-value
//! statistics produced by aggregation, and the per-species recommendation
//! summary consumed by the reporting layer.

use crate::constants::{LBS_TO_KG, UNKNOWN_LABEL};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single catch after column normalization
///
/// Every field has a deterministic default so a record can always be built,
/// whatever the source row looked like. Categorical fields default to
/// `"Unknown"` (or empty for free-text fields), numeric fields to `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchRecord {
    pub species: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Weight in pounds, as usually recorded on the boat
    pub weight_lbs: f64,
    pub place: String,
    pub primary_bait: String,
    pub enhancement: String,
    /// Water temperature in °C
    pub water_temp: f64,
    pub moon: String,
    pub tide_state: String,
    /// Raw time of strike, e.g. `"08:30"`
    pub time_of_strike: String,
    /// Free-text weather note, e.g. `"Calm SE"`
    pub weather: String,
    /// Cloud cover in percent
    pub cloud_cover: f64,
    /// Tide height in metres
    pub tide_height: f64,
    pub tidal_coeff: f64,
    /// Fish length in metres
    pub length: f64,
    pub line_lbs: f64,
    /// Air temperature in °C
    pub air_temp: f64,
}

impl Default for CatchRecord {
    fn default() -> Self {
        Self {
            species: String::new(),
            weight: 0.0,
            weight_lbs: 0.0,
            place: UNKNOWN_LABEL.to_string(),
            primary_bait: UNKNOWN_LABEL.to_string(),
            enhancement: String::new(),
            water_temp: 0.0,
            moon: UNKNOWN_LABEL.to_string(),
            tide_state: UNKNOWN_LABEL.to_string(),
            time_of_strike: String::new(),
            weather: String::new(),
            cloud_cover: 0.0,
            tide_height: 0.0,
            tidal_coeff: 0.0,
            length: 0.0,
            line_lbs: 0.0,
            air_temp: 0.0,
        }
    }
}

impl CatchRecord {
    /// Create a record for the given species with every other field defaulted
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Default::default()
        }
    }

    /// Set the weight from kilograms, keeping the pound value in sync
    pub fn with_weight_kg(mut self, kg: f64) -> Self {
        self.weight = kg;
        self.weight_lbs = kg / LBS_TO_KG;
        self
    }

    /// Set the weight from pounds, keeping the kilogram value in sync
    pub fn with_weight_lbs(mut self, lbs: f64) -> Self {
        self.weight_lbs = lbs;
        self.weight = lbs * LBS_TO_KG;
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn with_bait(mut self, bait: impl Into<String>) -> Self {
        self.primary_bait = bait.into();
        self
    }

    pub fn with_enhancement(mut self, enhancement: impl Into<String>) -> Self {
        self.enhancement = enhancement.into();
        self
    }

    pub fn with_moon(mut self, moon: impl Into<String>) -> Self {
        self.moon = moon.into();
        self
    }

    pub fn with_tide_state(mut self, tide_state: impl Into<String>) -> Self {
        self.tide_state = tide_state.into();
        self
    }

    pub fn with_time_of_strike(mut self, time: impl Into<String>) -> Self {
        self.time_of_strike = time.into();
        self
    }

    pub fn with_cloud_cover(mut self, cloud_cover: f64) -> Self {
        self.cloud_cover = cloud_cover;
        self
    }

    pub fn with_water_temp(mut self, water_temp: f64) -> Self {
        self.water_temp = water_temp;
        self
    }

    /// Check whether the record can be attributed to a species
    pub fn has_species(&self) -> bool {
        !self.species.trim().is_empty()
    }

    /// Weight expressed in the requested unit
    pub fn weight_in(&self, unit: WeightUnit) -> f64 {
        match unit {
            WeightUnit::Kilograms => self.weight,
            WeightUnit::Pounds => self.weight_lbs,
        }
    }
}

/// Unit used for every weight statistic in a summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
}

impl WeightUnit {
    /// Short unit suffix for display
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pounds" => Ok(WeightUnit::Pounds),
            other => Err(Error::configuration(format!(
                "Unknown weight unit '{}' (expected 'kg' or 'lbs')",
                other
            ))),
        }
    }
}

/// Categorical axis over which catches are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    Bait,
    Enhancement,
    Moon,
    Tide,
    Time,
    Weather,
}

impl Dimension {
    /// Every dimension, in report order
    pub const ALL: [Dimension; 7] = [
        Dimension::Location,
        Dimension::Bait,
        Dimension::Enhancement,
        Dimension::Moon,
        Dimension::Tide,
        Dimension::Time,
        Dimension::Weather,
    ];

    /// Human-readable heading
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Location => "Location",
            Dimension::Bait => "Bait",
            Dimension::Enhancement => "Enhancement",
            Dimension::Moon => "Moon phase",
            Dimension::Tide => "Tide",
            Dimension::Time => "Time of day",
            Dimension::Weather => "Weather",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Frequency and weight statistics for one value of a dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionStat {
    pub count: usize,
    pub total_weight: f64,
    /// `total_weight / count`, or 0 for an empty group
    pub avg_weight: f64,
    /// Share of all records passed to the aggregation, in [0, 100]
    pub percentage: f64,
}

impl DimensionStat {
    /// Derive averages and share from raw totals
    pub fn from_totals(count: usize, total_weight: f64, denominator: usize) -> Self {
        let avg_weight = if count == 0 {
            0.0
        } else {
            total_weight / count as f64
        };
        let percentage = if denominator == 0 {
            0.0
        } else {
            (count as f64 / denominator as f64) * 100.0
        };

        Self {
            count,
            total_weight,
            avg_weight,
            percentage,
        }
    }
}

/// Per-value statistics for one dimension, in first-encountered order
pub type DimensionStats = IndexMap<String, DimensionStat>;

/// A dimension value paired with its statistics
pub type RankedValue = (String, DimensionStat);

/// Best-conditions summary for one species
///
/// Always recomputed from scratch; an empty input yields zeros and `None`
/// for every `top_*` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub total_catches: usize,
    pub avg_weight: f64,
    pub max_weight: f64,
    pub weight_unit: WeightUnit,
    pub top_location: Option<RankedValue>,
    pub top_bait: Option<RankedValue>,
    pub top_enhancement: Option<RankedValue>,
    pub top_moon: Option<RankedValue>,
    pub top_tide: Option<RankedValue>,
    pub top_time: Option<RankedValue>,
    pub top_weather: Option<RankedValue>,
    /// Mean water temperature over catches with a reading
    pub avg_water_temp: f64,
    pub avg_cloud_cover: f64,
    /// Label of the most frequent weather bucket
    pub weather_preference: Option<String>,
    /// Top-N values per dimension, best first
    pub rankings: IndexMap<Dimension, Vec<RankedValue>>,
}

impl RecommendationSummary {
    /// Summary for an empty record set
    pub fn empty(weight_unit: WeightUnit) -> Self {
        Self {
            total_catches: 0,
            avg_weight: 0.0,
            max_weight: 0.0,
            weight_unit,
            top_location: None,
            top_bait: None,
            top_enhancement: None,
            top_moon: None,
            top_tide: None,
            top_time: None,
            top_weather: None,
            avg_water_temp: 0.0,
            avg_cloud_cover: 0.0,
            weather_preference: None,
            rankings: Dimension::ALL.iter().map(|d| (*d, Vec::new())).collect(),
        }
    }

    /// Top value for a dimension
    pub fn top(&self, dimension: Dimension) -> Option<&RankedValue> {
        match dimension {
            Dimension::Location => self.top_location.as_ref(),
            Dimension::Bait => self.top_bait.as_ref(),
            Dimension::Enhancement => self.top_enhancement.as_ref(),
            Dimension::Moon => self.top_moon.as_ref(),
            Dimension::Tide => self.top_tide.as_ref(),
            Dimension::Time => self.top_time.as_ref(),
            Dimension::Weather => self.top_weather.as_ref(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.total_catches > 0
    }
}

/// A summary labelled with the species it was computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecommendation {
    pub species: String,
    #[serde(flatten)]
    pub summary: RecommendationSummary,
}
