//! Parsing statistics and result structures for catch-log ingestion

use crate::app::models::CatchRecord;
use serde::{Deserialize, Serialize};

/// Parsed records together with how the file went
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Normalized records, including those without a species
    pub records: Vec<CatchRecord>,

    pub stats: ParseStats,

    /// Headers that were not mapped to any catch field
    pub unmapped_columns: Vec<String>,
}

/// Row-level parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows encountered, blank ones included
    pub total_records: usize,

    /// Rows converted into records
    pub records_parsed: usize,

    /// Blank rows and rows the CSV reader could not read
    pub records_skipped: usize,

    /// Malformed cells replaced by their default
    pub fields_defaulted: usize,

    /// Row-level errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed rows as a percentage of all rows
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows: {} parsed, {} skipped, {} fields defaulted ({:.1}% success)",
            self.total_records,
            self.records_parsed,
            self.records_skipped,
            self.fields_defaulted,
            self.success_rate()
        )
    }
}
