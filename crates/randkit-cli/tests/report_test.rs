//! End-to-end sampling runs with pinned seeds and a fixed clock.

use chrono::{TimeZone, Utc};
use randkit_cli::config::{DistributionKind, EngineKind, OutputFormat};
use randkit_cli::report::Row;
use randkit_cli::{AppError, FixedClock, SampleConfig, run};

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
}

fn seeded(distribution: DistributionKind, samples: usize) -> SampleConfig {
    SampleConfig {
        engine: EngineKind::Xorshift128,
        seed: vec![123_456_789, 362_436_069, 521_288_629, 88_675_123],
        distribution,
        samples,
        ..SampleConfig::default()
    }
}

fn row(label: &str, count: u64) -> Row {
    Row {
        label: label.to_string(),
        count,
    }
}

#[test]
fn test_seeded_uniform_int_report() {
    let report = run(&seeded(DistributionKind::UniformInt, 5), &fixed_clock()).unwrap();
    // Raw draws map onto [8, 1, 5, 8, 1].
    assert_eq!(report.occurrences, vec![row("1", 2), row("5", 1), row("8", 2)]);
    assert_eq!(report.duplicates, vec![row("1", 2), row("8", 2)]);
}

#[test]
fn test_text_rendering() {
    let report = run(&seeded(DistributionKind::UniformInt, 5), &fixed_clock()).unwrap();
    let text = report.render(OutputFormat::Text).unwrap();
    let full = "=".repeat(100);
    let half = "=".repeat(50);
    let expected = format!(
        "randkit sample report\n\
         generated at: 2026-01-15T10:00:00+00:00\n\
         engine: xorshift128\n\
         distribution: uniform-int\n\
         samples: 5\n\
         \n\
         Occurrences\n\
         1 | {full} 2\n\
         5 | {half} 1\n\
         8 | {full} 2\n\
         \n\
         Duplicates\n\
         1 x2\n\
         8 x2\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_json_rendering() {
    let report = run(&seeded(DistributionKind::UniformInt, 5), &fixed_clock()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["generated_at"], "2026-01-15T10:00:00Z");
    assert_eq!(json["engine"], "xorshift128");
    assert_eq!(json["samples"], 5);
    assert_eq!(json["occurrences"][0]["label"], "1");
    assert_eq!(json["duplicates"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unique_int_run_has_no_duplicates_within_cycle() {
    let config = SampleConfig {
        unique_percentage: 1.0,
        ..seeded(DistributionKind::UniqueInt, 10)
    };
    let report = run(&config, &fixed_clock()).unwrap();
    assert_eq!(report.occurrences.len(), 10);
    assert!(report.duplicates.is_empty());
}

#[test]
fn test_normal_real_run_is_bucketed() {
    let config = SampleConfig {
        buckets: 4,
        ..seeded(DistributionKind::NormalReal, 1000)
    };
    let report = run(&config, &fixed_clock()).unwrap();
    assert_eq!(report.occurrences.len(), 4);
    assert_eq!(report.occurrences.iter().map(|row| row.count).sum::<u64>(), 1000);
}

#[test]
fn test_identical_seeds_give_identical_reports() {
    let config = seeded(DistributionKind::UniqueString, 200);
    let first = run(&config, &fixed_clock()).unwrap();
    let second = run(&config, &fixed_clock()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fractional_integer_bounds_are_config_errors() {
    let config = SampleConfig {
        max: 2.5,
        ..seeded(DistributionKind::NormalInt, 1)
    };
    assert!(matches!(run(&config, &fixed_clock()), Err(AppError::Config(_))));
}
