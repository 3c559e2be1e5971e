//! Tests for validity filtering and quality reporting

use super::*;
use crate::app::services::analytics::validity_filter::{
    filter_species, filter_valid, is_valid, quality_report,
};

#[test]
fn test_filter_valid_drops_blank_species() {
    let records = vec![
        CatchRecord::new("Sailfish").with_weight_kg(40.0),
        CatchRecord::new("").with_weight_kg(10.0),
        CatchRecord::new("   ").with_weight_kg(12.0),
        CatchRecord::new("Black Marlin").with_weight_kg(120.0),
    ];

    let valid = filter_valid(records);

    assert_eq!(valid.len(), 2);
    assert_eq!(valid[0].species, "Sailfish");
    assert_eq!(valid[1].species, "Black Marlin");
}

#[test]
fn test_out_of_range_values_are_still_valid() {
    let record = CatchRecord::new("Sailfish")
        .with_cloud_cover(150.0)
        .with_time_of_strike("99:99")
        .with_weight_kg(0.0);

    assert!(is_valid(&record));
    assert_eq!(filter_valid(vec![record]).len(), 1);
}

#[test]
fn test_filter_valid_empty() {
    assert!(filter_valid(Vec::new()).is_empty());
}

#[test]
fn test_filter_species_matches_trimmed_name() {
    let mut records = mixed_fishing_log();
    records.push(CatchRecord::new(" Sailfish ").with_weight_kg(30.0));
    records.push(CatchRecord::new("sailfish").with_weight_kg(31.0));

    let sailfish = filter_species(&records, "Sailfish");

    // Exact match after trimming; case is significant
    assert_eq!(sailfish.len(), 3);
    assert!(sailfish.iter().all(|r| r.species.trim() == "Sailfish"));
}

#[test]
fn test_filter_species_blank_query_matches_nothing() {
    let mut records = mixed_fishing_log();
    records.push(CatchRecord::new(""));

    assert!(filter_species(&records, "").is_empty());
    assert!(filter_species(&records, "  ").is_empty());
}

#[test]
fn test_quality_report_counts_issues() {
    let records = vec![
        CatchRecord::new("Sailfish")
            .with_weight_kg(40.0)
            .with_time_of_strike("08:00")
            .with_cloud_cover(20.0),
        CatchRecord::new("")
            .with_weight_kg(10.0)
            .with_time_of_strike("09:00"),
        CatchRecord::new("Sailfish")
            .with_weight_kg(35.0)
            .with_time_of_strike("")
            .with_cloud_cover(120.0),
        CatchRecord::new("Sailfish").with_time_of_strike("10:00"),
    ];

    let report = quality_report(&records);

    assert_eq!(report.total_records, 4);
    assert_eq!(report.missing_species, 1);
    assert_eq!(report.cloud_cover_out_of_range, 1);
    assert_eq!(report.unknown_time_of_strike, 1);
    assert_eq!(report.non_positive_weight, 1);
    assert_eq!(report.clean_records, 1);
}

#[test]
fn test_quality_report_summary_handles_empty() {
    let report = quality_report(&[]);

    assert_eq!(report.total_records, 0);
    assert_eq!(report.clean_records, 0);
    assert!(report.summary().contains("0 records"));
    assert!(report.summary().contains("(0.0%)"));
}
