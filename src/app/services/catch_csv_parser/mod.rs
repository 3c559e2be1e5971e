//! Catch-log CSV ingestion
//!
//! Turns a spreadsheet export of a fishing log into normalized
//! [`crate::app::models::CatchRecord`]s. Header spellings vary between
//! exports, so columns are resolved through an explicit alias table, and
//! missing or malformed cells fall back to deterministic defaults.
//!
//! ## Architecture
//!
//! - [`parser`] - File handling and row loop
//! - [`column_mapping`] - Header alias resolution
//! - [`record_parser`] - Row to record normalization
//! - [`field_parsers`] - Cell extraction and lenient number parsing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use catchlog::app::services::catch_csv_parser::CatchCsvParser;
//!
//! let csv = "Species,Weight (lbs),Place\nSailfish,45.2,Lighthouse\n";
//! let result = CatchCsvParser::new().parse_str(csv)?;
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].place, "Lighthouse");
//! # Ok::<(), catchlog::Error>(())
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::{CanonicalField, ColumnMapping};
pub use parser::CatchCsvParser;
pub use stats::{ParseResult, ParseStats};
