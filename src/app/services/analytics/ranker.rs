//! Ranking of dimension values
//!
//! Order: highest count first, then highest average weight, then the value
//! that was encountered first in the input.

use crate::app::models::{DimensionStat, DimensionStats, RankedValue};
use std::cmp::Ordering;

/// Compare two stats, `Less` meaning `a` ranks ahead of `b`
///
/// Equal stats compare `Equal`; callers resolve those by insertion order.
pub fn compare_stats(a: &DimensionStat, b: &DimensionStat) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| b.avg_weight.total_cmp(&a.avg_weight))
}

/// Best value of a dimension, or `None` when there is nothing to rank
pub fn top_entry(stats: &DimensionStats) -> Option<RankedValue> {
    let mut best: Option<(&String, &DimensionStat)> = None;

    for (value, stat) in stats {
        match best {
            Some((_, current)) if compare_stats(stat, current) != Ordering::Less => {}
            _ => best = Some((value, stat)),
        }
    }

    best.map(|(value, stat)| (value.clone(), *stat))
}

/// Every value of a dimension, best first
pub fn ranked(stats: &DimensionStats) -> Vec<RankedValue> {
    let mut entries: Vec<RankedValue> = stats
        .iter()
        .map(|(value, stat)| (value.clone(), *stat))
        .collect();

    // Stable sort keeps insertion order among equal stats
    entries.sort_by(|(_, a), (_, b)| compare_stats(a, b));
    entries
}

/// The first `n` values of a dimension, best first
pub fn top_n(stats: &DimensionStats, n: usize) -> Vec<RankedValue> {
    let mut entries = ranked(stats);
    entries.truncate(n);
    entries
}
