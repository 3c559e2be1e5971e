//! Header resolution for catch-log exports
//!
//! Spreadsheet exports spell the same column several ways ("Weight (lbs)",
//! "WeightLbs", "Weight_lbs "). Each header is resolved once per file against
//! the alias table in [`crate::constants::column_aliases`].

use crate::constants::column_aliases;
use csv::StringRecord;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Canonical catch field a raw header can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Species,
    WeightLbs,
    WeightKg,
    Place,
    PrimaryBait,
    Enhancement,
    WaterTemp,
    Moon,
    TideState,
    TimeOfStrike,
    Weather,
    CloudCover,
    TideHeight,
    TidalCoeff,
    Length,
    LineLbs,
    AirTemp,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 17] = [
        CanonicalField::Species,
        CanonicalField::WeightLbs,
        CanonicalField::WeightKg,
        CanonicalField::Place,
        CanonicalField::PrimaryBait,
        CanonicalField::Enhancement,
        CanonicalField::WaterTemp,
        CanonicalField::Moon,
        CanonicalField::TideState,
        CanonicalField::TimeOfStrike,
        CanonicalField::Weather,
        CanonicalField::CloudCover,
        CanonicalField::TideHeight,
        CanonicalField::TidalCoeff,
        CanonicalField::Length,
        CanonicalField::LineLbs,
        CanonicalField::AirTemp,
    ];

    /// Accepted raw spellings, already normalized
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Species => column_aliases::SPECIES,
            CanonicalField::WeightLbs => column_aliases::WEIGHT_LBS,
            CanonicalField::WeightKg => column_aliases::WEIGHT_KG,
            CanonicalField::Place => column_aliases::PLACE,
            CanonicalField::PrimaryBait => column_aliases::PRIMARY_BAIT,
            CanonicalField::Enhancement => column_aliases::ENHANCEMENT,
            CanonicalField::WaterTemp => column_aliases::WATER_TEMP,
            CanonicalField::Moon => column_aliases::MOON,
            CanonicalField::TideState => column_aliases::TIDE_STATE,
            CanonicalField::TimeOfStrike => column_aliases::TIME_OF_STRIKE,
            CanonicalField::Weather => column_aliases::WEATHER,
            CanonicalField::CloudCover => column_aliases::CLOUD_COVER,
            CanonicalField::TideHeight => column_aliases::TIDE_HEIGHT,
            CanonicalField::TidalCoeff => column_aliases::TIDAL_COEFF,
            CanonicalField::Length => column_aliases::LENGTH,
            CanonicalField::LineLbs => column_aliases::LINE_LBS,
            CanonicalField::AirTemp => column_aliases::AIR_TEMP,
        }
    }

    /// Field name as it appears on [`crate::app::models::CatchRecord`]
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Species => "species",
            CanonicalField::WeightLbs => "weight_lbs",
            CanonicalField::WeightKg => "weight",
            CanonicalField::Place => "place",
            CanonicalField::PrimaryBait => "primary_bait",
            CanonicalField::Enhancement => "enhancement",
            CanonicalField::WaterTemp => "water_temp",
            CanonicalField::Moon => "moon",
            CanonicalField::TideState => "tide_state",
            CanonicalField::TimeOfStrike => "time_of_strike",
            CanonicalField::Weather => "weather",
            CanonicalField::CloudCover => "cloud_cover",
            CanonicalField::TideHeight => "tide_height",
            CanonicalField::TidalCoeff => "tidal_coeff",
            CanonicalField::Length => "length",
            CanonicalField::LineLbs => "line_lbs",
            CanonicalField::AirTemp => "air_temp",
        }
    }

    /// Resolve a raw header to its canonical field
    pub fn resolve(raw_header: &str) -> Option<Self> {
        let normalized = normalize_header(raw_header);
        Self::ALL
            .into_iter()
            .find(|field| field.aliases().contains(&normalized.as_str()))
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trim, lowercase and drop a leading byte-order mark
pub fn normalize_header(raw_header: &str) -> String {
    raw_header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
}

/// Resolved header layout of one catch-log file
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Canonical field to column index
    field_to_index: HashMap<CanonicalField, usize>,

    /// Headers that matched no alias, or repeated an already mapped field
    pub unmapped_columns: Vec<String>,
}

impl ColumnMapping {
    /// Resolve every header; the first column matching a field wins
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut mapping = ColumnMapping::default();

        for (index, header) in headers.iter().enumerate() {
            match CanonicalField::resolve(header) {
                Some(field) if !mapping.field_to_index.contains_key(&field) => {
                    debug!("Column {} '{}' -> {}", index, header.trim(), field);
                    mapping.field_to_index.insert(field, index);
                }
                Some(field) => {
                    debug!(
                        "Column {} '{}' duplicates {}, ignored",
                        index,
                        header.trim(),
                        field
                    );
                    mapping.unmapped_columns.push(header.trim().to_string());
                }
                None => {
                    debug!("Column {} '{}' not recognised, ignored", index, header.trim());
                    mapping.unmapped_columns.push(header.trim().to_string());
                }
            }
        }

        mapping
    }

    /// Column index of a canonical field
    pub fn get_index(&self, field: CanonicalField) -> Option<usize> {
        self.field_to_index.get(&field).copied()
    }

    pub fn has_field(&self, field: CanonicalField) -> bool {
        self.field_to_index.contains_key(&field)
    }

    /// (mapped, unmapped) column counts
    pub fn stats(&self) -> (usize, usize) {
        (self.field_to_index.len(), self.unmapped_columns.len())
    }
}
