//! Command implementations for the catchlog CLI
//!
//! Each subcommand loads configuration, obtains a dataset through
//! [`DataSource`], runs the analytics engine and hands the result to the
//! report writers.

use crate::app::services::analytics::{
    RecommendationEngine, filter_valid, list_species, overview, quality_report,
};
use crate::app::services::snapshot_cache::cache::max_age_from_hours;
use crate::app::services::snapshot_cache::{
    DataSource, LoadedDataset, PreferenceStore, SnapshotCache,
};
use crate::cli::args::{Args, CacheArgs, Commands, OutputFormat, RecommendArgs};
use crate::cli::report::{self, CacheStatus, StatsReport};
use crate::cli::species_select::select_species;
use crate::config::Config;
use crate::constants::PREF_SELECTED_SPECIES;
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::{self, IsTerminal, Write};
use tracing::{debug, info, warn};

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    args.validate()?;

    let config = load_configuration(&args)?;
    setup_logging(&args, &config);
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let Some(command) = args.command.clone() else {
        anyhow::bail!("No command given; run `catchlog --help`");
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let format = args.output_format;

    match command {
        Commands::Species => run_species(&config, format, &mut out),
        Commands::Recommend(recommend_args) => {
            run_recommend(&config, &recommend_args, format, &mut out)
        }
        Commands::Stats => run_stats(&config, format, &mut out),
        Commands::Refresh => run_refresh(&config, format, &mut out),
        Commands::Cache(cache_args) => run_cache(&config, &cache_args, format, &mut out),
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins; otherwise -v/-q, otherwise the configured level.
fn setup_logging(args: &Args, config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args
        .get_log_level()
        .unwrap_or(config.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catchlog={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config =
        Config::load_layered(config_file).context("Failed to load configuration")?;

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(input) = &args.input_path {
        config.data.input_path = Some(input.clone());
    }
    if let Some(cache_dir) = &args.cache_dir {
        config.data.cache_dir = cache_dir.clone();
    }
    if args.offline {
        config.data.offline = true;
    }
    if let Some(unit) = args.weight_unit {
        config.analysis.weight_unit = unit;
    }
    if let Some(top_n) = args.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

fn load_dataset(config: &Config) -> Result<LoadedDataset> {
    let dataset = DataSource::new(&config.data)
        .load()
        .context("Failed to load catch data")?;

    if let Some(stats) = &dataset.parse_stats {
        if stats.total_records > 0 && !stats.is_successful() {
            warn!("Many rows could not be read: {}", stats.summary());
        }
    }

    info!(
        "Loaded {} records from {}",
        dataset.records.len(),
        dataset.origin
    );
    Ok(dataset)
}

fn run_species<W: Write>(config: &Config, format: OutputFormat, out: &mut W) -> Result<()> {
    let dataset = load_dataset(config)?;
    let species = list_species(&dataset.records);
    report::write_species_list(out, &species, format)?;
    Ok(())
}

fn run_recommend<W: Write>(
    config: &Config,
    recommend_args: &RecommendArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let dataset = load_dataset(config)?;
    let records = filter_valid(dataset.records);
    let engine = RecommendationEngine::new(config.analysis.clone());

    if recommend_args.all {
        let recommendations = engine.recommend_all(&records);
        report::write_recommendations(out, &recommendations, format)?;
        return Ok(());
    }

    let preferences = PreferenceStore::new(&config.data.cache_dir);
    let species = resolve_species(recommend_args, &list_species(&records), &preferences)?;
    let recommendation = engine.recommend(&records, &species);

    if recommendation.summary.has_data() {
        if let Err(e) = preferences.set(PREF_SELECTED_SPECIES, &recommendation.species) {
            warn!("Could not save selected species: {}", e);
        }
    } else {
        warn!("No catches recorded for {}", recommendation.species);
    }

    report::write_recommendations(out, std::slice::from_ref(&recommendation), format)?;
    Ok(())
}

/// Species from the flag, the prompt, or the saved preference, in that order
fn resolve_species(
    recommend_args: &RecommendArgs,
    available: &[String],
    preferences: &PreferenceStore,
) -> Result<String> {
    if let Some(species) = &recommend_args.species {
        return Ok(species.trim().to_string());
    }

    let saved = preferences
        .get_string(PREF_SELECTED_SPECIES)
        .unwrap_or_else(|e| {
            warn!("Could not read preferences: {}", e);
            None
        });

    if recommend_args.pick || (saved.is_none() && io::stdin().is_terminal()) {
        return select_species(available, saved.as_deref());
    }

    match saved {
        Some(species) if available.contains(&species) => {
            info!("Using last selected species: {}", species);
            Ok(species)
        }
        Some(species) => anyhow::bail!(
            "Last selected species '{}' is not in the dataset; use --species, --pick or --all",
            species
        ),
        None => anyhow::bail!(
            "No species given; use --species <NAME>, --pick or --all (available: {})",
            available.join(", ")
        ),
    }
}

fn run_stats<W: Write>(config: &Config, format: OutputFormat, out: &mut W) -> Result<()> {
    let dataset = load_dataset(config)?;

    let stats = StatsReport {
        origin: dataset.origin,
        saved_at: dataset.saved_at,
        overview: overview(&dataset.records),
        quality: quality_report(&dataset.records),
        parse_stats: dataset.parse_stats,
    };

    report::write_stats(out, &stats, format)?;
    Ok(())
}

fn run_refresh<W: Write>(config: &Config, format: OutputFormat, out: &mut W) -> Result<()> {
    let dataset = DataSource::new(&config.data)
        .refresh()
        .context("Failed to refresh catch data")?;
    info!("Refreshed snapshot with {} records", dataset.records.len());

    report::write_cache_status(out, &cache_status(config), format)?;
    Ok(())
}

fn run_cache<W: Write>(
    config: &Config,
    cache_args: &CacheArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if cache_args.clear {
        let removed = SnapshotCache::new(&config.data.cache_dir)
            .invalidate()
            .context("Failed to clear snapshot")?;
        if !removed {
            info!("No snapshot to clear");
        }
    }

    report::write_cache_status(out, &cache_status(config), format)?;
    Ok(())
}

/// Inspect the snapshot and preferences; unreadable files are reported as absent
fn cache_status(config: &Config) -> CacheStatus {
    let cache = SnapshotCache::new(&config.data.cache_dir);
    let snapshot = cache.load().unwrap_or_else(|e| {
        warn!("Snapshot is unreadable: {}", e);
        None
    });

    let max_age = max_age_from_hours(config.data.max_cache_age_hours);
    let selected_species = PreferenceStore::new(&config.data.cache_dir)
        .get_string(PREF_SELECTED_SPECIES)
        .ok()
        .flatten();

    CacheStatus {
        path: cache.path().to_path_buf(),
        exists: snapshot.is_some(),
        saved_at: snapshot.as_ref().map(|s| s.saved_at),
        source: snapshot.as_ref().map(|s| s.source.clone()),
        record_count: snapshot.as_ref().map_or(0, |s| s.records.len()),
        stale: snapshot
            .as_ref()
            .is_none_or(|s| s.age(Utc::now()) > max_age),
        selected_species,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::WeightUnit;
    use clap::Parser;
    use std::path::Path;
    use tempfile::TempDir;

    const CATCHES: &str = "Species,Weight (lbs),Place,Primary Bait,Time of Strike,Cloud Cover (%)
Sailfish,45.2,Lighthouse,Halfbeak,08:30,30
Sailfish,38.1,Sailfish Bay,Halfbeak,14:15,60
Black Marlin,120.5,Lighthouse,Live Bait,11:00,20
";

    fn test_config(dir: &Path) -> Config {
        let input = dir.join("catches.csv");
        std::fs::write(&input, CATCHES).unwrap();

        let mut config = Config::default();
        config.data.input_path = Some(input);
        config.data.cache_dir = dir.join("cache");
        config
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_apply_cli_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();

        let args = Args::try_parse_from([
            "catchlog",
            "stats",
            "--input",
            "catches.csv",
            "--cache-dir",
            temp_dir.path().to_str().unwrap(),
            "--offline",
            "--weight-unit",
            "lbs",
            "--top",
            "7",
            "-vv",
        ])
        .unwrap();

        apply_cli_overrides(&mut config, &args);

        assert_eq!(
            config.data.input_path.as_deref(),
            Some(Path::new("catches.csv"))
        );
        assert_eq!(config.data.cache_dir, temp_dir.path());
        assert!(config.data.offline);
        assert_eq!(config.analysis.weight_unit, WeightUnit::Pounds);
        assert_eq!(config.analysis.top_n, 7);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_overrides_leave_unset_values() {
        let mut config = Config::default();
        config.data.offline = true;
        config.analysis.top_n = 4;

        let args = Args::try_parse_from(["catchlog", "species"]).unwrap();
        apply_cli_overrides(&mut config, &args);

        assert!(config.data.offline);
        assert_eq!(config.analysis.top_n, 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_species_command_json() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(temp_dir.path());

        let json = render(|out| run_species(&config, OutputFormat::Json, out));
        let species: Vec<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(species, vec!["Black Marlin", "Sailfish"]);
    }

    #[test]
    fn test_recommend_saves_selected_species() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(temp_dir.path());
        let recommend_args = RecommendArgs {
            species: Some("Sailfish".to_string()),
            ..Default::default()
        };

        let json = render(|out| run_recommend(&config, &recommend_args, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["total_catches"], 2);
        assert_eq!(value[0]["top_bait"][0], "Halfbeak");

        let saved = PreferenceStore::new(&config.data.cache_dir)
            .get_string(PREF_SELECTED_SPECIES)
            .unwrap();
        assert_eq!(saved.as_deref(), Some("Sailfish"));

        // Second run without --species picks up the saved choice
        let json = render(|out| {
            run_recommend(&config, &RecommendArgs::default(), OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["species"], "Sailfish");
    }

    #[test]
    fn test_recommend_all_csv() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(temp_dir.path());
        let recommend_args = RecommendArgs {
            all: true,
            ..Default::default()
        };

        let csv = render(|out| run_recommend(&config, &recommend_args, OutputFormat::Csv, out));

        assert!(csv.contains("Black Marlin,Location,1,Lighthouse,1"));
        assert!(csv.contains("Sailfish,Location,1,Lighthouse,1"));
    }

    #[test]
    fn test_cache_clear_then_status() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(temp_dir.path());

        render(|out| run_stats(&config, OutputFormat::Json, out));
        assert!(cache_status(&config).exists);
        assert_eq!(cache_status(&config).record_count, 3);

        let json = render(|out| {
            run_cache(&config, &CacheArgs { clear: true }, OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["exists"], false);
        assert_eq!(value["stale"], true);
    }

    #[test]
    fn test_refresh_requires_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(temp_dir.path());
        config.data.input_path = None;

        let mut buffer = Vec::new();
        assert!(run_refresh(&config, OutputFormat::Human, &mut buffer).is_err());
    }
}
