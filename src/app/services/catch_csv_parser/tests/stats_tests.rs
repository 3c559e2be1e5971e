//! Tests for parsing statistics functionality

use super::super::stats::ParseStats;

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_records: 100,
        records_parsed: 95,
        records_skipped: 5,
        fields_defaulted: 3,
        errors: vec!["Error 1".to_string()],
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());

    let poor_stats = ParseStats {
        total_records: 100,
        records_parsed: 80,
        records_skipped: 20,
        ..Default::default()
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
    assert!(!poor_stats.is_successful());
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_records, 0);
    assert_eq!(empty_stats.records_parsed, 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful());
}

#[test]
fn test_parse_stats_summary() {
    let stats = ParseStats {
        total_records: 4,
        records_parsed: 3,
        records_skipped: 1,
        fields_defaulted: 2,
        errors: Vec::new(),
    };

    assert_eq!(
        stats.summary(),
        "4 rows: 3 parsed, 1 skipped, 2 fields defaulted (75.0% success)"
    );
}
