//! Tests for the analytics engine
//!
//! Shared fixtures live here; each component has its own test module.

mod property_tests;
mod validity_filter_tests;

use crate::app::models::CatchRecord;

/// Four Sailfish catches: three at Lighthouse, one at Sailfish Bay
pub fn lighthouse_records() -> Vec<CatchRecord> {
    vec![
        CatchRecord::new("Sailfish")
            .with_place("Lighthouse")
            .with_weight_kg(45.0),
        CatchRecord::new("Sailfish")
            .with_place("Lighthouse")
            .with_weight_kg(38.0),
        CatchRecord::new("Sailfish")
            .with_place("Sailfish Bay")
            .with_weight_kg(52.0),
        CatchRecord::new("Sailfish")
            .with_place("Lighthouse")
            .with_weight_kg(41.0),
    ]
}

/// Small mixed-species log with every dimension populated
pub fn mixed_fishing_log() -> Vec<CatchRecord> {
    vec![
        CatchRecord::new("Sailfish")
            .with_weight_lbs(45.2)
            .with_place("Lighthouse")
            .with_bait("Halfbeak")
            .with_enhancement("Hawaiian Eye")
            .with_time_of_strike("08:30")
            .with_moon("Full Moon")
            .with_tide_state("Outgoing")
            .with_water_temp(26.0)
            .with_cloud_cover(30.0),
        CatchRecord::new("Sailfish")
            .with_weight_lbs(38.1)
            .with_place("Sailfish Bay")
            .with_bait("Halfbeak")
            .with_enhancement("")
            .with_time_of_strike("14:15")
            .with_moon("Waning Gibbous")
            .with_tide_state("Incoming")
            .with_water_temp(25.0)
            .with_cloud_cover(60.0),
        CatchRecord::new("Black Marlin")
            .with_weight_lbs(120.5)
            .with_place("Lighthouse")
            .with_bait("Live Bait")
            .with_enhancement("")
            .with_time_of_strike("11:00")
            .with_moon("New Moon")
            .with_tide_state("Outgoing")
            .with_water_temp(27.0)
            .with_cloud_cover(20.0),
    ]
}

/// Record with only a place and weight, for aggregation tests
pub fn catch_at(place: &str, kg: f64) -> CatchRecord {
    CatchRecord::new("Sailfish").with_place(place).with_weight_kg(kg)
}
