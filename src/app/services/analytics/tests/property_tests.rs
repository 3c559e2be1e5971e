//! Property-based checks over arbitrary catch sets

use crate::app::models::{CatchRecord, Dimension, WeightUnit};
use crate::app::services::analytics::aggregator::aggregate_dimension;
use crate::app::services::analytics::ranker::{ranked, top_entry};
use crate::app::services::analytics::summary::summarize;
use proptest::prelude::*;

const PLACES: &[&str] = &["Lighthouse", "Sailfish Bay", "North Camp", "3 Trees"];
const BAITS: &[&str] = &["Halfbeak", "Live Bait", "Lure"];

fn arb_record() -> impl Strategy<Value = CatchRecord> {
    (
        0..PLACES.len(),
        0..BAITS.len(),
        0.0f64..150.0,
        0u32..30,
        0.0f64..100.0,
    )
        .prop_map(|(place, bait, kg, hour, cloud)| {
            CatchRecord::new("Sailfish")
                .with_place(PLACES[place])
                .with_bait(BAITS[bait])
                .with_weight_kg(kg)
                .with_time_of_strike(format!("{:02}:15", hour))
                .with_cloud_cover(cloud)
        })
}

proptest! {
    #[test]
    fn counts_and_percentages_cover_every_record(
        records in prop::collection::vec(arb_record(), 1..60)
    ) {
        for dimension in Dimension::ALL {
            let stats = aggregate_dimension(&records, dimension, WeightUnit::Kilograms);

            let count: usize = stats.values().map(|s| s.count).sum();
            let percentage: f64 = stats.values().map(|s| s.percentage).sum();

            prop_assert_eq!(count, records.len());
            prop_assert!((percentage - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn top_entry_is_head_of_ranking(
        records in prop::collection::vec(arb_record(), 0..60)
    ) {
        let stats = aggregate_dimension(&records, Dimension::Location, WeightUnit::Kilograms);
        prop_assert_eq!(top_entry(&stats), ranked(&stats).into_iter().next());
    }

    #[test]
    fn summarize_is_deterministic(
        records in prop::collection::vec(arb_record(), 0..40)
    ) {
        let first = summarize(&records);
        let second = summarize(&records);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.total_catches, records.len());
        prop_assert!(first.max_weight + 1e-9 >= first.avg_weight);
    }
}
