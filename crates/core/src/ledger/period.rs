//! Period ranges over journal entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// Inclusive range of periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// First period in the range.
    pub earliest: NaiveDate,
    /// Last period in the range.
    pub latest: NaiveDate,
}

impl PeriodRange {
    /// Creates a new range. No ordering check is made; an inverted range is empty.
    #[must_use]
    pub const fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self { earliest, latest }
    }

    /// Returns true if `period` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, period: NaiveDate) -> bool {
        self.earliest <= period && period <= self.latest
    }

    /// Returns true if no period can fall within the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.earliest > self.latest
    }
}

/// Returns the earliest and latest periods found in `entries`.
///
/// Returns `None` when there are no entries.
#[must_use]
pub fn maximum_period_range(entries: &[JournalEntry]) -> Option<PeriodRange> {
    let earliest = entries.iter().map(|e| e.period).min()?;
    let latest = entries.iter().map(|e| e.period).max()?;
    Some(PeriodRange::new(earliest, latest))
}
