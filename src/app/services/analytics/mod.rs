//! Recommendation and analytics engine for catch records
//!
//! This module turns a set of normalized catch records into "best conditions"
//! summaries. It performs no I/O, holds no state between calls and never
//! fails: missing data shows up as zero totals and `None` rankings.
//!
//! # Architecture
//!
//! - [`validity_filter`] - Drops records without a species, reports data quality
//! - [`bucketizer`] - Time-of-day and cloud-cover buckets
//! - [`aggregator`] - Ordered group-by and per-value statistics
//! - [`ranker`] - Count-then-weight ranking with first-seen tie-break
//! - [`summary`] - Assembly of the per-species recommendation
//! - [`overview`] - Species listing and dataset-level shares
//!
//! # Pipeline
//!
//! records → validity filter → species filter → aggregate per dimension →
//! rank → summary
//!
//! # Example Usage
//!
//! ```rust
//! use catchlog::app::models::CatchRecord;
//! use catchlog::app::services::analytics::{filter_valid, summarize};
//!
//! let records = vec![
//!     CatchRecord::new("Sailfish").with_place("Lighthouse").with_weight_kg(45.0),
//!     CatchRecord::new("Sailfish").with_place("Sailfish Bay").with_weight_kg(52.0),
//!     CatchRecord::new("Sailfish").with_place("Lighthouse").with_weight_kg(41.0),
//! ];
//!
//! let summary = summarize(&filter_valid(records));
//! let (place, stat) = summary.top_location.unwrap();
//! assert_eq!(place, "Lighthouse");
//! assert_eq!(stat.count, 2);
//! ```

pub mod aggregator;
pub mod bucketizer;
pub mod overview;
pub mod ranker;
pub mod summary;
pub mod validity_filter;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use aggregator::{aggregate, aggregate_dimension, aggregate_weighted, group_by};
pub use bucketizer::{TimeBucket, WeatherBucket};
pub use overview::{DatasetOverview, SpeciesShare, list_species, overview};
pub use ranker::{compare_stats, ranked, top_entry, top_n};
pub use summary::{RecommendationEngine, summarize};
pub use validity_filter::{QualityReport, filter_species, filter_valid, is_valid, quality_report};
