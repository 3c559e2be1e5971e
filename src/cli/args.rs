//! Command-line argument definitions for catchlog
//!
//! Global options may appear before or after the subcommand.

use crate::app::models::WeightUnit;
use crate::constants::MAX_TOP_N;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the catch log analyser
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catchlog",
    version,
    about = "Best-conditions recommendations from a fishing catch log",
    long_about = "Reads a catch-log CSV export (one row per catch) and reports, per species, \
                  the location, bait, enhancement, moon phase, tide, time of day and weather \
                  that produced the most catches. The last dataset read is kept in a local \
                  snapshot so reports keep working offline."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catch-log CSV export to read
    #[arg(
        short = 'i',
        long = "input",
        value_name = "CSV",
        global = true,
        help = "Catch-log CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// TOML configuration file
    ///
    /// If not specified, looks for config.toml in the user config directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory for the dataset snapshot and preferences
    #[arg(
        long = "cache-dir",
        value_name = "DIR",
        global = true,
        help = "Directory for the snapshot and preference files"
    )]
    pub cache_dir: Option<PathBuf>,

    /// Use the cached snapshot without reading the input file
    #[arg(long = "offline", global = true, help = "Read only the cached snapshot")]
    pub offline: bool,

    /// Unit for weight statistics
    #[arg(
        long = "weight-unit",
        value_name = "UNIT",
        global = true,
        help = "Weight unit for statistics (kg or lbs)"
    )]
    pub weight_unit: Option<WeightUnit>,

    /// Ranked values shown per dimension
    #[arg(
        long = "top",
        value_name = "N",
        global = true,
        help = "Number of ranked values per dimension"
    )]
    pub top_n: Option<usize>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List species found in the dataset
    Species,
    /// Print the best-conditions summary for one or all species
    Recommend(RecommendArgs),
    /// Dataset overview and data quality report
    Stats,
    /// Discard the snapshot and reload from the input file
    Refresh,
    /// Show snapshot status, or clear it
    Cache(CacheArgs),
}

/// Arguments for the recommend command
#[derive(Debug, Clone, Default, Parser)]
pub struct RecommendArgs {
    /// Species to summarize; defaults to the last one selected
    #[arg(short = 's', long = "species", value_name = "NAME")]
    pub species: Option<String>,

    /// Summarize every species
    #[arg(long = "all", conflicts_with_all = ["species", "pick"])]
    pub all: bool,

    /// Choose the species from a numbered list
    #[arg(short = 'p', long = "pick", conflicts_with = "species")]
    pub pick: bool,
}

/// Arguments for the cache command
#[derive(Debug, Clone, Default, Parser)]
pub struct CacheArgs {
    /// Delete the snapshot
    #[arg(long = "clear")]
    pub clear: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Check option values that clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(top_n) = self.top_n {
            if top_n == 0 || top_n > MAX_TOP_N {
                return Err(Error::configuration(format!(
                    "--top must be between 1 and {}, got {}",
                    MAX_TOP_N, top_n
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Log level implied by -v/-q, `None` when neither was given
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }
}
