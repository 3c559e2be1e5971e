//! Tests for header alias resolution

use crate::app::services::catch_csv_parser::column_mapping::{
    CanonicalField, ColumnMapping, normalize_header,
};
use csv::StringRecord;

#[test]
fn test_resolve_known_spellings() {
    let cases = [
        ("Weight (lbs)", CanonicalField::WeightLbs),
        ("WeightLbs", CanonicalField::WeightLbs),
        ("Weight_lbs", CanonicalField::WeightLbs),
        ("Weight", CanonicalField::WeightKg),
        ("Weight (kg)", CanonicalField::WeightKg),
        ("Location", CanonicalField::Place),
        ("Primary Bait", CanonicalField::PrimaryBait),
        ("PrimaryBait", CanonicalField::PrimaryBait),
        ("Water Temperature (°C)", CanonicalField::WaterTemp),
        ("Moon Phase", CanonicalField::Moon),
        ("TideState", CanonicalField::TideState),
        ("Time of Strike", CanonicalField::TimeOfStrike),
        ("Cloud Cover (%)", CanonicalField::CloudCover),
        ("Tidal Coefficient", CanonicalField::TidalCoeff),
        ("Air Temp (°C)", CanonicalField::AirTemp),
    ];

    for (raw, expected) in cases {
        assert_eq!(CanonicalField::resolve(raw), Some(expected), "header {:?}", raw);
    }
}

#[test]
fn test_trailing_spaces_and_case_ignored() {
    assert_eq!(
        CanonicalField::resolve("Primary_Bait "),
        Some(CanonicalField::PrimaryBait)
    );
    assert_eq!(
        CanonicalField::resolve("  SPECIES  "),
        Some(CanonicalField::Species)
    );
    assert_eq!(
        CanonicalField::resolve("weight (LBS)"),
        Some(CanonicalField::WeightLbs)
    );
}

#[test]
fn test_unknown_headers_unresolved() {
    assert_eq!(CanonicalField::resolve("Angler"), None);
    assert_eq!(CanonicalField::resolve(""), None);
    assert_eq!(CanonicalField::resolve("Species Name"), None);
}

#[test]
fn test_normalize_header_strips_bom() {
    assert_eq!(normalize_header("\u{feff}Species"), "species");
    assert_eq!(normalize_header(" Cloud Cover (%) "), "cloud cover (%)");
}

#[test]
fn test_aliases_do_not_overlap() {
    for (i, a) in CanonicalField::ALL.iter().enumerate() {
        for b in &CanonicalField::ALL[i + 1..] {
            for alias in a.aliases() {
                assert!(
                    !b.aliases().contains(alias),
                    "alias {:?} shared by {} and {}",
                    alias,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_analyze_maps_and_collects_unmapped() {
    let headers = StringRecord::from(vec!["Species", "Angler", "Weight (lbs)", "Boat", "Place"]);
    let mapping = ColumnMapping::analyze(&headers);

    assert_eq!(mapping.get_index(CanonicalField::Species), Some(0));
    assert_eq!(mapping.get_index(CanonicalField::WeightLbs), Some(2));
    assert_eq!(mapping.get_index(CanonicalField::Place), Some(4));
    assert!(!mapping.has_field(CanonicalField::Moon));
    assert_eq!(mapping.unmapped_columns, vec!["Angler", "Boat"]);
    assert_eq!(mapping.stats(), (3, 2));
}

#[test]
fn test_analyze_first_matching_column_wins() {
    let headers = StringRecord::from(vec!["Species", "Place", "Location"]);
    let mapping = ColumnMapping::analyze(&headers);

    assert_eq!(mapping.get_index(CanonicalField::Place), Some(1));
    assert_eq!(mapping.unmapped_columns, vec!["Location"]);
}
