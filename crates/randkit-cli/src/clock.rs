//! Generation timestamps for sampling reports.
//!
//! `run` stamps every report with `Clock::now`. Seeded runs under a
//! `FixedClock` therefore render byte-identical reports.

use chrono::{DateTime, Utc};

/// Supplies the `generated_at` stamp of a report.
pub trait Clock: Send + Sync {
    /// The instant a report is generated.
    fn now(&self) -> DateTime<Utc>;
}

/// Stamps reports with the wall-clock time of the run.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Stamps every report with the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
