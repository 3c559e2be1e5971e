//! Validity filtering and data quality reporting for catch records
//!
//! A record is analysable as soon as it names a species. Everything else has
//! already been defaulted during ingestion, so range problems are reported
//! here but never cause a record to be dropped.

use crate::app::models::CatchRecord;
use crate::constants::CLOUD_COVER_RANGE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::bucketizer::TimeBucket;

/// Keep only records with a non-blank species
pub fn filter_valid(records: Vec<CatchRecord>) -> Vec<CatchRecord> {
    let total = records.len();
    let valid: Vec<CatchRecord> = records.into_iter().filter(is_valid).collect();

    info!(
        "Validity filtering complete: {} -> {} records ({} without species)",
        total,
        valid.len(),
        total - valid.len()
    );

    valid
}

/// Check whether a record can take part in analysis
pub fn is_valid(record: &CatchRecord) -> bool {
    record.has_species()
}

/// Records of one species, matched on the trimmed species name
pub fn filter_species(records: &[CatchRecord], species: &str) -> Vec<CatchRecord> {
    let wanted = species.trim();
    let matched: Vec<CatchRecord> = records
        .iter()
        .filter(|record| is_valid(record) && record.species.trim() == wanted)
        .cloned()
        .collect();

    debug!("Species filter '{}': {} records", wanted, matched.len());
    matched
}

/// Counts of suspicious values in a record set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_records: usize,
    pub missing_species: usize,
    pub cloud_cover_out_of_range: usize,
    pub unknown_time_of_strike: usize,
    pub non_positive_weight: usize,
    /// Records without any flagged issue
    pub clean_records: usize,
}

impl QualityReport {
    /// One-line summary for logging
    pub fn summary(&self) -> String {
        let pct = |count: usize| {
            if self.total_records == 0 {
                0.0
            } else {
                (count as f64 / self.total_records as f64) * 100.0
            }
        };

        format!(
            "Quality Summary: {} records | \
             {} missing species ({:.1}%) | \
             {} cloud cover out of range ({:.1}%) | \
             {} unknown strike time ({:.1}%) | \
             {} without weight ({:.1}%)",
            self.total_records,
            self.missing_species,
            pct(self.missing_species),
            self.cloud_cover_out_of_range,
            pct(self.cloud_cover_out_of_range),
            self.unknown_time_of_strike,
            pct(self.unknown_time_of_strike),
            self.non_positive_weight,
            pct(self.non_positive_weight)
        )
    }
}

/// Tally data quality issues without excluding anything
pub fn quality_report(records: &[CatchRecord]) -> QualityReport {
    let mut report = QualityReport {
        total_records: records.len(),
        ..Default::default()
    };

    for record in records {
        let issues = RecordIssues::inspect(record);
        report.missing_species += usize::from(issues.missing_species);
        report.cloud_cover_out_of_range += usize::from(issues.cloud_cover_out_of_range);
        report.unknown_time_of_strike += usize::from(issues.unknown_time_of_strike);
        report.non_positive_weight += usize::from(issues.non_positive_weight);
        if issues.is_clean() {
            report.clean_records += 1;
        }
    }

    debug!("{}", report.summary());
    report
}

struct RecordIssues {
    missing_species: bool,
    cloud_cover_out_of_range: bool,
    unknown_time_of_strike: bool,
    non_positive_weight: bool,
}

impl RecordIssues {
    fn inspect(record: &CatchRecord) -> Self {
        let (min, max) = CLOUD_COVER_RANGE;
        Self {
            missing_species: !record.has_species(),
            cloud_cover_out_of_range: record.cloud_cover < min || record.cloud_cover > max,
            unknown_time_of_strike: TimeBucket::from_time_of_strike(&record.time_of_strike)
                == TimeBucket::Unknown,
            non_positive_weight: record.weight <= 0.0,
        }
    }

    fn is_clean(&self) -> bool {
        !(self.missing_species
            || self.cloud_cover_out_of_range
            || self.unknown_time_of_strike
            || self.non_positive_weight)
    }
}
