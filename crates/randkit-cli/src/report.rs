//! Occurrence histograms and duplicate listings.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{OutputFormat, SampleConfig};
use crate::error::AppError;
use crate::sampler::Sample;

/// Width of the bar drawn for the most frequent row.
pub const BAR_WIDTH: u64 = 100;

/// One histogram or duplicate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub count: u64,
}

/// The result of a sampling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub engine: String,
    pub distribution: String,
    pub samples: usize,
    /// Rows ordered by value, or by bucket for real distributions.
    pub occurrences: Vec<Row>,
    /// Values seen more than once, most repeated first.
    pub duplicates: Vec<Row>,
}

/// Equal-width histogram bins over `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buckets {
    min: f64,
    max: f64,
    count: usize,
}

impl Buckets {
    #[must_use]
    pub fn new(min: f64, max: f64, count: usize) -> Self {
        Self {
            min,
            max,
            count: count.max(1),
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn index(&self, value: f64) -> usize {
        let fraction = (value - self.min) / (self.max - self.min);
        let index = (fraction * self.count as f64).floor().max(0.0) as usize;
        index.min(self.count - 1)
    }

    #[allow(clippy::cast_precision_loss)]
    fn label(&self, index: usize) -> String {
        let width = (self.max - self.min) / self.count as f64;
        let low = self.min + width * index as f64;
        let high = if index + 1 == self.count {
            self.max
        } else {
            self.min + width * (index + 1) as f64
        };
        format!("[{low:.3}, {high:.3})")
    }
}

impl Report {
    /// Tallies `samples`. Reals are binned into `buckets` for the
    /// occurrence histogram; duplicates are always exact values.
    #[must_use]
    pub fn new(
        generated_at: DateTime<Utc>,
        config: &SampleConfig,
        samples: &[Sample],
        buckets: Option<Buckets>,
    ) -> Self {
        let mut exact: BTreeMap<Key, u64> = BTreeMap::new();
        for sample in samples {
            *exact.entry(Key::from(sample)).or_default() += 1;
        }

        let occurrences = match buckets {
            Some(buckets) => {
                let mut counts = vec![0_u64; buckets.count];
                for (key, count) in &exact {
                    if let Key::Real(RealKey(value)) = key {
                        counts[buckets.index(*value)] += count;
                    }
                }
                counts
                    .into_iter()
                    .enumerate()
                    .map(|(index, count)| Row {
                        label: buckets.label(index),
                        count,
                    })
                    .collect()
            }
            None => exact
                .iter()
                .map(|(key, count)| Row {
                    label: key.label(),
                    count: *count,
                })
                .collect(),
        };

        let mut repeated: Vec<(&Key, u64)> = exact
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(key, count)| (key, *count))
            .collect();
        // Stable: ties stay in value order.
        repeated.sort_by(|a, b| b.1.cmp(&a.1));
        let duplicates = repeated
            .into_iter()
            .map(|(key, count)| Row {
                label: key.label(),
                count,
            })
            .collect();

        Self {
            generated_at,
            engine: config.engine.to_string(),
            distribution: config.distribution.to_string(),
            samples: samples.len(),
            occurrences,
            duplicates,
        }
    }

    /// Renders the report.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Json` if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, AppError> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Plain-text rendering with `=` bars scaled to the largest count.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "randkit sample report");
        let _ = writeln!(out, "generated at: {}", self.generated_at.to_rfc3339());
        let _ = writeln!(out, "engine: {}", self.engine);
        let _ = writeln!(out, "distribution: {}", self.distribution);
        let _ = writeln!(out, "samples: {}", self.samples);

        let _ = writeln!(out, "\nOccurrences");
        let width = label_width(&self.occurrences);
        let peak = self.occurrences.iter().map(|row| row.count).max().unwrap_or(0);
        for row in &self.occurrences {
            let bar = "=".repeat(bar_length(row.count, peak));
            let _ = writeln!(out, "{:>width$} | {bar} {}", row.label, row.count);
        }

        let _ = writeln!(out, "\nDuplicates");
        if self.duplicates.is_empty() {
            let _ = writeln!(out, "(none)");
        }
        let width = label_width(&self.duplicates);
        for row in &self.duplicates {
            let _ = writeln!(out, "{:>width$} x{}", row.label, row.count);
        }
        out
    }
}

/// `count / peak` of `BAR_WIDTH`, rounded to the nearest character.
#[must_use]
pub fn bar_length(count: u64, peak: u64) -> usize {
    if peak == 0 {
        return 0;
    }
    let scaled = u128::from(count) * u128::from(BAR_WIDTH) + u128::from(peak) / 2;
    usize::try_from(scaled / u128::from(peak)).unwrap_or(usize::MAX)
}

fn label_width(rows: &[Row]) -> usize {
    rows.iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0)
}

/// Tally key; one run only ever produces one variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Key {
    Int(i64),
    Real(RealKey),
    Text(String),
}

impl Key {
    fn label(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Real(RealKey(value)) => value.to_string(),
            Self::Text(value) => value.escape_debug().to_string(),
        }
    }
}

impl From<&Sample> for Key {
    fn from(sample: &Sample) -> Self {
        match sample {
            Sample::Int(value) => Self::Int(*value),
            Sample::Real(value) => Self::Real(RealKey(*value)),
            Sample::Text(value) => Self::Text(value.clone()),
        }
    }
}

/// Totally ordered `f64`.
#[derive(Debug, Clone, Copy)]
struct RealKey(f64);

impl PartialEq for RealKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RealKey {}

impl PartialOrd for RealKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
