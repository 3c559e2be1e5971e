//! Dataset-level views: species listing and per-species catch shares

use crate::app::models::CatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::aggregator::group_by;

/// Sorted, de-duplicated species names over valid records
pub fn list_species(records: &[CatchRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.has_species())
        .map(|record| record.species.trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Catch count and share for one species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesShare {
    pub species: String,
    pub count: usize,
    pub percentage: f64,
}

/// Headline numbers for a whole dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub total_records: usize,
    pub valid_records: usize,
    pub species_count: usize,
    /// Most caught species first; equal counts in alphabetical order
    pub per_species: Vec<SpeciesShare>,
}

/// Summarize a raw (unfiltered) dataset
pub fn overview(records: &[CatchRecord]) -> DatasetOverview {
    let valid: Vec<&CatchRecord> = records.iter().filter(|r| r.has_species()).collect();
    let valid_records = valid.len();

    let mut per_species: Vec<SpeciesShare> = group_by(&valid, |r| r.species.trim().to_string())
        .into_iter()
        .map(|(species, group)| SpeciesShare {
            species,
            count: group.len(),
            percentage: (group.len() as f64 / valid_records as f64) * 100.0,
        })
        .collect();

    per_species.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.species.cmp(&b.species)));

    DatasetOverview {
        total_records: records.len(),
        valid_records,
        species_count: per_species.len(),
        per_species,
    }
}
