//! Group-by and per-value statistics over catch records
//!
//! Grouping uses an insertion-ordered map so that the position of a value is
//! the position of its first occurrence in the input. The ranker relies on
//! that order for its final tie-break.

use crate::app::models::{CatchRecord, Dimension, DimensionStat, DimensionStats, WeightUnit};
use crate::constants::NO_ENHANCEMENT_LABEL;
use indexmap::IndexMap;
use std::hash::Hash;

use super::bucketizer::{TimeBucket, WeatherBucket};

/// Group items by key, preserving first-encountered key order
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> IndexMap<K, Vec<&'a T>>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a T>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(item);
    }
    groups
}

/// Aggregate records by the value a selector returns, weighing in kilograms
pub fn aggregate<F>(records: &[CatchRecord], selector: F) -> DimensionStats
where
    F: FnMut(&CatchRecord) -> String,
{
    aggregate_weighted(records, selector, WeightUnit::Kilograms)
}

/// Aggregate records by selector value, weighing in the given unit
///
/// Percentages use the full input length as denominator, so they sum to 100
/// across groups for any non-empty input.
pub fn aggregate_weighted<F>(records: &[CatchRecord], selector: F, unit: WeightUnit) -> DimensionStats
where
    F: FnMut(&CatchRecord) -> String,
{
    let total = records.len();

    group_by(records, selector)
        .into_iter()
        .map(|(value, group)| {
            let total_weight: f64 = group.iter().map(|record| record.weight_in(unit)).sum();
            let stat = DimensionStat::from_totals(group.len(), total_weight, total);
            (value, stat)
        })
        .collect()
}

/// Aggregate records along one of the standard dimensions
pub fn aggregate_dimension(
    records: &[CatchRecord],
    dimension: Dimension,
    unit: WeightUnit,
) -> DimensionStats {
    aggregate_weighted(records, |record| dimension.select(record), unit)
}

impl Dimension {
    /// Grouping key of a record along this dimension
    pub fn select(&self, record: &CatchRecord) -> String {
        match self {
            Dimension::Location => record.place.clone(),
            Dimension::Bait => record.primary_bait.clone(),
            Dimension::Enhancement => {
                if record.enhancement.trim().is_empty() {
                    NO_ENHANCEMENT_LABEL.to_string()
                } else {
                    record.enhancement.clone()
                }
            }
            Dimension::Moon => record.moon.clone(),
            Dimension::Tide => record.tide_state.clone(),
            Dimension::Time => TimeBucket::from_time_of_strike(&record.time_of_strike)
                .label()
                .to_string(),
            Dimension::Weather => WeatherBucket::from_cloud_cover(record.cloud_cover)
                .label()
                .to_string(),
        }
    }
}
