//! Report rendering for human, JSON and CSV output
//!
//! Every writer takes an `impl Write` so commands print to stdout and tests
//! render into a buffer.

use crate::Result;
use crate::app::models::{Dimension, RankedValue, SpeciesRecommendation, WeightUnit};
use crate::app::services::analytics::{DatasetOverview, QualityReport};
use crate::app::services::catch_csv_parser::ParseStats;
use crate::app::services::snapshot_cache::DatasetOrigin;
use crate::cli::args::OutputFormat;
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Everything the `stats` command reports
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub origin: DatasetOrigin,
    pub saved_at: Option<DateTime<Utc>>,
    pub overview: DatasetOverview,
    pub quality: QualityReport,
    pub parse_stats: Option<ParseStats>,
}

/// Snapshot and preference state for the `cache` command
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub path: PathBuf,
    pub exists: bool,
    pub saved_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub record_count: usize,
    pub stale: bool,
    pub selected_species: Option<String>,
}

pub fn write_species_list<W: Write>(
    out: &mut W,
    species: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if species.is_empty() {
                writeln!(out, "{}", "No species found in the dataset".yellow())?;
                return Ok(());
            }
            writeln!(out, "{}", "Species in catch log:".bright_green().bold())?;
            for (i, name) in species.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {}",
                    (i + 1).to_string().bright_yellow().bold(),
                    name.bright_cyan()
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, species)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["species"])?;
            for name in species {
                writer.write_record([name])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[SpeciesRecommendation],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for (i, recommendation) in recommendations.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_human_recommendation(out, recommendation)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, recommendations)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv_rankings(out, recommendations)?,
    }
    Ok(())
}

fn write_human_recommendation<W: Write>(
    out: &mut W,
    recommendation: &SpeciesRecommendation,
) -> Result<()> {
    let summary = &recommendation.summary;
    let unit = summary.weight_unit;

    writeln!(out, "{}", recommendation.species.bright_green().bold())?;

    if !summary.has_data() {
        writeln!(out, "  {}", "No catches recorded for this species".yellow())?;
        return Ok(());
    }

    writeln!(
        out,
        "  {} catches, average {}, heaviest {}",
        summary.total_catches,
        format_weight(summary.avg_weight, unit),
        format_weight(summary.max_weight, unit)
    )?;
    writeln!(out)?;

    for dimension in Dimension::ALL {
        let line = match summary.top(dimension) {
            Some(entry) => format_ranked(entry, unit),
            None => "n/a".bright_black().to_string(),
        };
        writeln!(out, "  {:<12} {}", format!("{}:", dimension.label()), line)?;
    }

    if summary.avg_water_temp > 0.0 {
        writeln!(out, "  {:<12} {:.1} °C", "Water temp:", summary.avg_water_temp)?;
    }
    writeln!(out, "  {:<12} {:.0}%", "Cloud cover:", summary.avg_cloud_cover)?;

    let runners_up: Vec<(Dimension, &Vec<RankedValue>)> = summary
        .rankings
        .iter()
        .filter(|(_, ranked)| ranked.len() > 1)
        .map(|(dimension, ranked)| (*dimension, ranked))
        .collect();

    if !runners_up.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {}", "Rankings".bold())?;
        for (dimension, ranked) in runners_up {
            let entries: Vec<String> = ranked
                .iter()
                .enumerate()
                .map(|(i, (value, stat))| format!("{}. {} ({})", i + 1, value, stat.count))
                .collect();
            writeln!(out, "  {:<12} {}", format!("{}:", dimension.label()), entries.join(", "))?;
        }
    }

    Ok(())
}

fn format_ranked((value, stat): &RankedValue, unit: WeightUnit) -> String {
    format!(
        "{} {}",
        value.bright_cyan(),
        format!(
            "({} catches, {:.1}%, avg {})",
            stat.count,
            stat.percentage,
            format_weight(stat.avg_weight, unit)
        )
        .bright_black()
    )
}

fn format_weight(weight: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", weight, unit.symbol())
}

/// One row per ranked value: species,dimension,rank,value,count,avg_weight,percentage
fn write_csv_rankings<W: Write>(
    out: &mut W,
    recommendations: &[SpeciesRecommendation],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "species",
        "dimension",
        "rank",
        "value",
        "count",
        "avg_weight",
        "percentage",
    ])?;

    for recommendation in recommendations {
        for (dimension, ranked) in &recommendation.summary.rankings {
            for (i, (value, stat)) in ranked.iter().enumerate() {
                writer.write_record([
                    recommendation.species.clone(),
                    dimension.label().to_string(),
                    (i + 1).to_string(),
                    value.clone(),
                    stat.count.to_string(),
                    format!("{:.3}", stat.avg_weight),
                    format!("{:.2}", stat.percentage),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, report: &StatsReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let overview = &report.overview;
            writeln!(out, "{}", "Catch log overview".bright_green().bold())?;
            writeln!(out, "  Data from:     {}", describe_origin(report.origin, report.saved_at))?;
            writeln!(out, "  Records:       {}", overview.total_records)?;
            writeln!(out, "  With species:  {}", overview.valid_records)?;
            writeln!(out, "  Species:       {}", overview.species_count)?;
            writeln!(out)?;
            for share in &overview.per_species {
                writeln!(
                    out,
                    "  {:<20} {:>5}  {}",
                    share.species.bright_cyan(),
                    share.count,
                    format!("{:.1}%", share.percentage).bright_black()
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{}", "Data quality".bright_green().bold())?;
            writeln!(out, "  {}", report.quality.summary())?;
            if let Some(parse_stats) = &report.parse_stats {
                writeln!(out, "  Parsing: {}", parse_stats.summary())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["metric", "value"])?;
            let overview = &report.overview;
            let quality = &report.quality;
            let rows = [
                ("total_records", overview.total_records),
                ("valid_records", overview.valid_records),
                ("species_count", overview.species_count),
                ("missing_species", quality.missing_species),
                ("cloud_cover_out_of_range", quality.cloud_cover_out_of_range),
                ("unknown_time_of_strike", quality.unknown_time_of_strike),
                ("non_positive_weight", quality.non_positive_weight),
                ("clean_records", quality.clean_records),
            ];
            for (metric, value) in rows {
                writer.write_record([metric.to_string(), value.to_string()])?;
            }
            for share in &overview.per_species {
                writer.write_record([format!("species:{}", share.species), share.count.to_string()])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_cache_status<W: Write>(
    out: &mut W,
    status: &CacheStatus,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{}", "Snapshot cache".bright_green().bold())?;
            writeln!(out, "  Path:      {}", status.path.display())?;
            if status.exists {
                let saved = status
                    .saved_at
                    .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                writeln!(out, "  Saved:     {}", saved)?;
                writeln!(out, "  Source:    {}", status.source.as_deref().unwrap_or("unknown"))?;
                writeln!(out, "  Records:   {}", status.record_count)?;
                if status.stale {
                    writeln!(out, "  {}", "Snapshot is stale; run `catchlog refresh`".yellow())?;
                }
            } else {
                writeln!(out, "  {}", "No snapshot cached".yellow())?;
            }
            if let Some(species) = &status.selected_species {
                writeln!(out, "  Selected:  {}", species.bright_cyan())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, status)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["metric", "value"])?;
            let rows = [
                ("path", status.path.display().to_string()),
                ("exists", status.exists.to_string()),
                (
                    "saved_at",
                    status.saved_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                ),
                ("source", status.source.clone().unwrap_or_default()),
                ("record_count", status.record_count.to_string()),
                ("stale", status.stale.to_string()),
                (
                    "selected_species",
                    status.selected_species.clone().unwrap_or_default(),
                ),
            ];
            for (metric, value) in rows {
                writer.write_record([metric.to_string(), value])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn describe_origin(origin: DatasetOrigin, saved_at: Option<DateTime<Utc>>) -> String {
    match (origin, saved_at) {
        (DatasetOrigin::Cache, Some(saved_at)) => {
            format!("cached snapshot ({})", saved_at.format("%Y-%m-%d %H:%M UTC"))
        }
        (DatasetOrigin::Cache, None) => "cached snapshot".to_string(),
        (DatasetOrigin::Source, _) => "input file".to_string(),
    }
}
