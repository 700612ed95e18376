//! Wall-clock adapter for the `Clock` port.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use sladash_core::Clock;
use sladash_domain::{ReportConfig, Result, SlaDashError};

/// Today's date in a fixed reporting timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// # Errors
    /// Returns `SlaDashError::Config` for an unknown IANA timezone name.
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        let timezone = config.timezone.parse::<Tz>().map_err(|e| {
            SlaDashError::Config(format!("Invalid report timezone '{}': {e}", config.timezone))
        })?;
        Ok(Self::new(timezone))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}
