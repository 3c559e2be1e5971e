//! Test utilities for catch-log CSV parsing

use std::io::Write;
use tempfile::NamedTempFile;

mod column_mapping_tests;
mod stats_tests;

/// Export in the layout the boat spreadsheet produces, trailing spaces included
pub fn sample_catch_log_csv() -> String {
    "Species,Weight (lbs),Place,Primary_Bait ,Enhancement,Water Temperature (°C),Moon,Tide State,Time of Strike,Weather,Cloud Cover (%),Length (m),Angler
Sailfish,45.2,Lighthouse,Halfbeak,Hawaiian Eye,26.5,Full Moon,Outgoing,08:30,Calm SE,30,2.1,Ray
Sailfish,38.1,Sailfish Bay,Halfbeak,,25.0,Waning Gibbous,Incoming,14:15,Light NW,60%,1.9,Sam
Black Marlin,120.5,Lighthouse,Live Bait,,27.0,New Moon,Outgoing,11:00,Calm,20,3.2,Ray
,12.0,North Camp,Lure,,24.0,Full Moon,High,07:00,,10,,Kim
"
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
