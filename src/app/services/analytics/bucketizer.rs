//! Bucketing of raw time and cloud-cover readings into categorical labels

use crate::constants::{time_buckets, weather_buckets};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day bucket derived from the hour of the strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
    Night,
    /// Time was missing or unparsable; never folded into `Night`
    Unknown,
}

impl TimeBucket {
    /// Bucket a raw time of strike such as `"06:30"`
    ///
    /// Only the leading hour before the first `:` or `.` is read. Hours are
    /// bucketed on half-open intervals: `[5,12)` morning, `[12,17)`
    /// afternoon, `[17,20)` evening, everything else night.
    pub fn from_time_of_strike(time_of_strike: &str) -> Self {
        match parse_hour(time_of_strike) {
            Some(hour) => Self::from_hour(hour),
            None => TimeBucket::Unknown,
        }
    }

    /// Bucket an hour already known to be in 0..=23
    pub fn from_hour(hour: u32) -> Self {
        use time_buckets::*;

        match hour {
            h if (MORNING_START..AFTERNOON_START).contains(&h) => TimeBucket::Morning,
            h if (AFTERNOON_START..EVENING_START).contains(&h) => TimeBucket::Afternoon,
            h if (EVENING_START..NIGHT_START).contains(&h) => TimeBucket::Evening,
            _ => TimeBucket::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "Morning (5am-12pm)",
            TimeBucket::Afternoon => "Afternoon (12pm-5pm)",
            TimeBucket::Evening => "Evening (5pm-8pm)",
            TimeBucket::Night => "Night (8pm-5am)",
            TimeBucket::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extract the hour component, rejecting anything outside 0..=23
///
/// A trailing `am`/`pm` marker reads the hour on a 12-hour clock (12 am is
/// midnight, 12 pm is noon). Signs and hours outside 1..=12 with a marker
/// are rejected.
fn parse_hour(time_of_strike: &str) -> Option<u32> {
    let lowered = time_of_strike.trim().to_ascii_lowercase();
    if lowered.is_empty() {
        return None;
    }

    let (clock, is_pm) = if let Some(rest) = lowered.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else if let Some(rest) = lowered.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else {
        (lowered.as_str(), None)
    };

    let hour_part = clock
        .split([':', '.'])
        .next()
        .map(str::trim)
        .filter(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))?;

    let hour = hour_part.parse::<u32>().ok()?;
    match is_pm {
        None => (hour <= time_buckets::MAX_HOUR).then_some(hour),
        Some(is_pm) if (1..=12).contains(&hour) => Some(hour % 12 + if is_pm { 12 } else { 0 }),
        Some(_) => None,
    }
}

/// Sky condition bucket derived from cloud cover percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherBucket {
    ClearSkies,
    PartlyCloudy,
    Overcast,
}

impl WeatherBucket {
    /// Bucket a cloud cover percentage
    ///
    /// Values outside 0–100 are bucketed as-is.
    pub fn from_cloud_cover(cloud_cover: f64) -> Self {
        if cloud_cover < weather_buckets::PARTLY_CLOUDY_MIN {
            WeatherBucket::ClearSkies
        } else if cloud_cover < weather_buckets::OVERCAST_MIN {
            WeatherBucket::PartlyCloudy
        } else {
            WeatherBucket::Overcast
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherBucket::ClearSkies => "Clear skies",
            WeatherBucket::PartlyCloudy => "Partly cloudy",
            WeatherBucket::Overcast => "Overcast",
        }
    }
}

impl fmt::Display for WeatherBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
