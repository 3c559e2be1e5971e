//! Conversion of one CSV row into a [`CatchRecord`]

use csv::StringRecord;
use tracing::debug;

use super::column_mapping::{CanonicalField, ColumnMapping};
use super::field_parsers::{get_optional_field, parse_optional_f64, parse_text};
use crate::app::models::CatchRecord;
use crate::constants::{LBS_TO_KG, UNKNOWN_LABEL};

/// A normalized row and the number of malformed cells that were defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub record: CatchRecord,
    pub fields_defaulted: usize,
}

/// Normalize a single row; never fails
///
/// Malformed numbers become absent, absent numbers become `0.0`. When only one
/// of the two weight columns has a value the other is derived from it.
pub fn parse_catch_record(record: &StringRecord, mapping: &ColumnMapping) -> ParsedRow {
    let mut fields_defaulted = 0;
    let mut number = |field: CanonicalField| match parse_optional_f64(record, mapping, field) {
        Ok(value) => value,
        Err(e) => {
            debug!("Defaulting field: {}", e);
            fields_defaulted += 1;
            None
        }
    };

    let kg = number(CanonicalField::WeightKg);
    let lbs = number(CanonicalField::WeightLbs);
    let (weight, weight_lbs) = match (kg, lbs) {
        (Some(kg), Some(lbs)) => (kg, lbs),
        (Some(kg), None) => (kg, kg / LBS_TO_KG),
        (None, Some(lbs)) => (lbs * LBS_TO_KG, lbs),
        (None, None) => (0.0, 0.0),
    };

    let water_temp = number(CanonicalField::WaterTemp).unwrap_or(0.0);
    let cloud_cover = number(CanonicalField::CloudCover).unwrap_or(0.0);
    let tide_height = number(CanonicalField::TideHeight).unwrap_or(0.0);
    let tidal_coeff = number(CanonicalField::TidalCoeff).unwrap_or(0.0);
    let length = number(CanonicalField::Length).unwrap_or(0.0);
    let line_lbs = number(CanonicalField::LineLbs).unwrap_or(0.0);
    let air_temp = number(CanonicalField::AirTemp).unwrap_or(0.0);

    let catch = CatchRecord {
        species: get_optional_field(record, mapping, CanonicalField::Species)
            .unwrap_or_default()
            .to_string(),
        weight,
        weight_lbs,
        place: parse_text(record, mapping, CanonicalField::Place, UNKNOWN_LABEL),
        primary_bait: parse_text(record, mapping, CanonicalField::PrimaryBait, UNKNOWN_LABEL),
        enhancement: parse_text(record, mapping, CanonicalField::Enhancement, ""),
        water_temp,
        moon: parse_text(record, mapping, CanonicalField::Moon, UNKNOWN_LABEL),
        tide_state: parse_text(record, mapping, CanonicalField::TideState, UNKNOWN_LABEL),
        time_of_strike: parse_text(record, mapping, CanonicalField::TimeOfStrike, ""),
        weather: parse_text(record, mapping, CanonicalField::Weather, ""),
        cloud_cover,
        tide_height,
        tidal_coeff,
        length,
        line_lbs,
        air_temp,
    };

    ParsedRow {
        record: catch,
        fields_defaulted,
    }
}

/// True when every cell of the row is blank
pub fn is_blank_row(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
