//! Catch-log CSV parser
//!
//! Reads the header row once, resolves it through the alias table, then turns
//! every data row into a [`crate::app::models::CatchRecord`]. Individual rows
//! never abort a file; only a missing species column does.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::{CanonicalField, ColumnMapping};
use super::record_parser::{is_blank_row, parse_catch_record};
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// Parser for catch-log CSV exports
#[derive(Debug, Clone)]
pub struct CatchCsvParser {
    delimiter: u8,
}

impl Default for CatchCsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatchCsvParser {
    /// Comma-delimited parser
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different field delimiter (e.g. `b';'` for some locales)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a catch-log file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing catch log: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open {}", file_path.display()), e)
        })?;

        self.parse_reader(file, &file_path.display().to_string())
    }

    /// Parse catch-log content held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes(), "<memory>")
    }

    /// Parse catch-log content from any reader; `origin` labels errors
    pub fn parse_reader<R: Read>(&self, reader: R, origin: &str) -> Result<ParseResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(origin, "Failed to read header row", Some(e)))?
            .clone();

        let mapping = ColumnMapping::analyze(&headers);
        if !mapping.has_field(CanonicalField::Species) {
            return Err(Error::csv_format(
                origin,
                "No species column found in header row",
            ));
        }

        let (mapped, unmapped) = mapping.stats();
        debug!("Column mapping: {} mapped, {} ignored", mapped, unmapped);
        if !mapping.has_field(CanonicalField::WeightKg)
            && !mapping.has_field(CanonicalField::WeightLbs)
        {
            warn!("{}: no weight column, all weights will be 0", origin);
        }

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(row) => {
                    if is_blank_row(&row) {
                        stats.records_skipped += 1;
                        continue;
                    }

                    let parsed = parse_catch_record(&row, &mapping);
                    stats.fields_defaulted += parsed.fields_defaulted;
                    stats.records_parsed += 1;
                    records.push(parsed.record);
                }
                Err(e) => {
                    stats.records_skipped += 1;
                    stats
                        .errors
                        .push(format!("CSV parse error at record {}: {}", stats.total_records, e));
                    debug!("Skipped record {}: {}", stats.total_records, e);
                }
            }
        }

        info!("Parsed {}: {}", origin, stats.summary());

        Ok(ParseResult {
            records,
            stats,
            unmapped_columns: mapping.unmapped_columns,
        })
    }
}
