//! Calendar date ranges handed to the remote query layer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::{Result, SlaDashError};

/// Inclusive calendar date range.
///
/// # Field Invariants
/// - `start_date <= end_date`
/// - Both ends serialize as zero-padded ISO `YYYY-MM-DD`, so lexicographic and
///   chronological order agree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDateRange")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DateRange {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    start_date: NaiveDate,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    end_date: NaiveDate,
}

impl DateRange {
    /// Build a range whose bounds are already known to be ordered.
    ///
    /// Callers deriving both ends from the same calendar rule use this;
    /// external input goes through [`DateRange::try_new`].
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        debug_assert!(start_date <= end_date, "date range start after end");
        Self { start_date, end_date }
    }

    /// Build a range from untrusted bounds.
    ///
    /// # Errors
    /// Returns `SlaDashError::InvalidInput` when `start_date > end_date`.
    pub fn try_new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if start_date > end_date {
            return Err(SlaDashError::InvalidInput(format!(
                "date range start {start_date} is after end {end_date}"
            )));
        }
        Ok(Self { start_date, end_date })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Start date as `YYYY-MM-DD`.
    pub fn start_iso(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    /// End date as `YYYY-MM-DD`.
    pub fn end_iso(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }

    /// Number of calendar days covered, both ends included.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_iso(), self.end_iso())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = SlaDashError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::try_new(raw.start_date, raw.end_date)
    }
}
