//! Per-species recommendation assembly
//!
//! Combines the aggregator and ranker across every dimension into one
//! [`RecommendationSummary`]. Summaries are pure functions of their input:
//! nothing is cached between calls.

use crate::app::models::{CatchRecord, Dimension, RecommendationSummary, SpeciesRecommendation};
use crate::config::AnalysisConfig;
use indexmap::IndexMap;
use tracing::{debug, info};

use super::aggregator::aggregate_dimension;
use super::overview::list_species;
use super::ranker::{top_entry, top_n};
use super::validity_filter::filter_species;

/// Summarize records with the default analysis settings (kilograms, top 3)
///
/// `records` are expected to be valid and already filtered to one species.
pub fn summarize(records: &[CatchRecord]) -> RecommendationSummary {
    RecommendationEngine::default().summarize(records)
}

/// Recommendation engine configured with a weight unit and ranking depth
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: AnalysisConfig,
}

impl RecommendationEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Build the summary for an already species-filtered, valid record set
    pub fn summarize(&self, records: &[CatchRecord]) -> RecommendationSummary {
        let unit = self.config.weight_unit;

        if records.is_empty() {
            debug!("No records to summarize");
            return RecommendationSummary::empty(unit);
        }

        let total_catches = records.len();
        let weights = records.iter().map(|record| record.weight_in(unit));
        let avg_weight = weights.clone().sum::<f64>() / total_catches as f64;
        let max_weight = weights.fold(f64::NEG_INFINITY, f64::max);

        let mut summary = RecommendationSummary::empty(unit);
        summary.total_catches = total_catches;
        summary.avg_weight = avg_weight;
        summary.max_weight = max_weight;

        let mut rankings = IndexMap::with_capacity(Dimension::ALL.len());
        for dimension in Dimension::ALL {
            let stats = aggregate_dimension(records, dimension, unit);
            let top = top_entry(&stats);

            match dimension {
                Dimension::Location => summary.top_location = top,
                Dimension::Bait => summary.top_bait = top,
                Dimension::Enhancement => summary.top_enhancement = top,
                Dimension::Moon => summary.top_moon = top,
                Dimension::Tide => summary.top_tide = top,
                Dimension::Time => summary.top_time = top,
                Dimension::Weather => summary.top_weather = top,
            }

            rankings.insert(dimension, top_n(&stats, self.config.top_n));
        }
        summary.rankings = rankings;

        summary.weather_preference = summary
            .top_weather
            .as_ref()
            .map(|(label, _)| label.clone());
        summary.avg_water_temp = mean_of_readings(records.iter().map(|r| r.water_temp));
        summary.avg_cloud_cover =
            records.iter().map(|r| r.cloud_cover).sum::<f64>() / total_catches as f64;

        summary
    }

    /// Summary for one species out of a mixed record set
    pub fn recommend(&self, records: &[CatchRecord], species: &str) -> SpeciesRecommendation {
        let species_records = filter_species(records, species);
        let summary = self.summarize(&species_records);

        info!(
            "Recommendation for {}: {} catches, top location {:?}",
            species.trim(),
            summary.total_catches,
            summary.top_location.as_ref().map(|(value, _)| value.as_str())
        );

        SpeciesRecommendation {
            species: species.trim().to_string(),
            summary,
        }
    }

    /// Summaries for every species present, in alphabetical order
    pub fn recommend_all(&self, records: &[CatchRecord]) -> Vec<SpeciesRecommendation> {
        list_species(records)
            .iter()
            .map(|species| self.recommend(records, species))
            .collect()
    }
}

/// Mean over non-zero readings; zero means "not recorded"
fn mean_of_readings(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .filter(|value| *value != 0.0)
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 { 0.0 } else { sum / count as f64 }
}
