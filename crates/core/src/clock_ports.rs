//! Clock port interface
//!
//! Supplies the reporting calendar's "today". Implementations decide the
//! timezone; tests pin a fixed date.

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to one date, for tests and `--today` overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
