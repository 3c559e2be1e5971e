//! Test utilities for snapshot and preference persistence

use crate::app::models::CatchRecord;
use crate::config::DataConfig;
use std::path::{Path, PathBuf};

mod preferences_tests;

pub const SAMPLE_CSV: &str = "Species,Weight (lbs),Place,Time of Strike
Sailfish,45.2,Lighthouse,08:30
Sailfish,38.1,Sailfish Bay,14:15
Black Marlin,120.5,Lighthouse,11:00
";

pub fn sample_records() -> Vec<CatchRecord> {
    vec![
        CatchRecord::new("Sailfish")
            .with_place("Lighthouse")
            .with_weight_lbs(45.2),
        CatchRecord::new("Black Marlin")
            .with_place("Lighthouse")
            .with_weight_lbs(120.5),
    ]
}

/// Data config rooted in a test directory
pub fn data_config(cache_dir: &Path, input_path: Option<PathBuf>, offline: bool) -> DataConfig {
    DataConfig {
        input_path,
        cache_dir: cache_dir.to_path_buf(),
        offline,
        ..Default::default()
    }
}
