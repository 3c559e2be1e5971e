//! Summary and parsing throughput
//!
//! Measures a full catch-log pass: CSV parse, validity filter and the
//! per-species summary over a few thousand generated rows.

use catchlog::app::services::analytics::{RecommendationEngine, filter_valid, summarize};
use catchlog::app::services::catch_csv_parser::CatchCsvParser;
use catchlog::config::AnalysisConfig;
use catchlog::{CatchRecord, WeightUnit};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SPECIES: [&str; 5] = ["Sailfish", "Black Marlin", "Dorado", "Wahoo", "Yellowfin Tuna"];
const PLACES: [&str; 4] = ["Lighthouse", "Sailfish Bay", "The Canyon", "Reef Edge"];
const BAITS: [&str; 3] = ["Halfbeak", "Live Bait", "Lure"];
const MOONS: [&str; 4] = ["New Moon", "First Quarter", "Full Moon", "Last Quarter"];
const TIDES: [&str; 4] = ["Rising", "High", "Falling", "Low"];

fn generate_csv(rows: usize) -> String {
    let mut csv = String::from(
        "Species,Weight (lbs),Place,Primary Bait,Moon,Tide State,Time of Strike,Cloud Cover (%),Water Temperature\n",
    );
    for i in 0..rows {
        csv.push_str(&format!(
            "{},{:.1},{},{},{},{},{:02}:{:02},{},{:.1}\n",
            if i % 97 == 0 { "" } else { SPECIES[i % SPECIES.len()] },
            20.0 + (i % 150) as f64 * 0.7,
            PLACES[(i / 3) % PLACES.len()],
            BAITS[(i / 7) % BAITS.len()],
            MOONS[(i / 11) % MOONS.len()],
            TIDES[(i / 5) % TIDES.len()],
            (i * 7) % 24,
            (i * 13) % 60,
            (i * 17) % 101,
            24.0 + (i % 6) as f64 * 0.5,
        ));
    }
    csv
}

fn generate_records(rows: usize) -> Vec<CatchRecord> {
    let parsed = CatchCsvParser::new()
        .parse_str(&generate_csv(rows))
        .expect("generated CSV parses");
    filter_valid(parsed.records)
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for rows in [500, 2_000] {
        let records = generate_records(rows);
        group.bench_with_input(BenchmarkId::new("all_records", rows), &records, |b, records| {
            b.iter(|| black_box(summarize(black_box(records))));
        });
    }

    let records = generate_records(2_000);
    let engine = RecommendationEngine::new(
        AnalysisConfig::default().with_weight_unit(WeightUnit::Pounds),
    );
    group.bench_function("recommend_all_2000", |b| {
        b.iter(|| black_box(engine.recommend_all(black_box(&records))));
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let csv = generate_csv(2_000);
    let parser = CatchCsvParser::new();

    c.bench_function("parse_2000_rows", |b| {
        b.iter(|| black_box(parser.parse_str(black_box(&csv))));
    });
}

criterion_group!(benches, bench_summarize, bench_parse);
criterion_main!(benches);
