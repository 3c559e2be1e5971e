//! Field extraction helpers for catch-log rows
//!
//! Absent and blank cells are not errors. Only a present cell that cannot be
//! read as a number is reported, and the caller decides the default.

use super::column_mapping::{CanonicalField, ColumnMapping};
use crate::{Error, Result};
use csv::StringRecord;

/// Trimmed, non-empty cell value for a field
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field: CanonicalField,
) -> Option<&'a str> {
    mapping
        .get_index(field)
        .and_then(|index| record.get(index))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Text field, or `default` when absent or blank
pub fn parse_text(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field: CanonicalField,
    default: &str,
) -> String {
    get_optional_field(record, mapping, field)
        .unwrap_or(default)
        .to_string()
}

/// Optional numeric field
///
/// `Ok(None)` for an absent or blank cell, an error for a cell that is not a
/// finite number.
pub fn parse_optional_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field: CanonicalField,
) -> Result<Option<f64>> {
    match get_optional_field(record, mapping, field) {
        None => Ok(None),
        Some(raw) => parse_number(raw).map(Some).ok_or_else(|| {
            Error::data_validation(format!("Invalid number for {}: '{}'", field, raw))
        }),
    }
}

/// Lenient number parsing: surrounding spaces and a trailing `%` are allowed
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_end_matches('%').trim_end();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
