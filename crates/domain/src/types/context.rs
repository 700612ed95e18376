//! Reporting contexts that select a date-range rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{impl_domain_enum_conversions, SlaDashError};

/// Which end of the current month the generic "current month" window stops
/// at. Both shapes are consumed by different report endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenericMonthVariant {
    /// Ends today; on the 1st covers the last two days of the previous month.
    ToDate,
    /// Ends yesterday; on the 1st covers the whole previous month.
    ToYesterday,
}

impl_domain_enum_conversions!(GenericMonthVariant {
    ToDate => "to-date",
    ToYesterday => "to-yesterday",
});

/// Reporting context, one per consuming dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "context", content = "variant", rename_all = "kebab-case")]
pub enum ReportingContext {
    DashboardChart,
    MonthlySummary,
    DailyReport,
    PotensiSpWindow,
    ProblemWindow,
    GenericCurrentMonth(GenericMonthVariant),
}

impl ReportingContext {
    /// Every context, generic variants expanded.
    pub const ALL: [Self; 7] = [
        Self::DashboardChart,
        Self::MonthlySummary,
        Self::DailyReport,
        Self::PotensiSpWindow,
        Self::ProblemWindow,
        Self::GenericCurrentMonth(GenericMonthVariant::ToDate),
        Self::GenericCurrentMonth(GenericMonthVariant::ToYesterday),
    ];

    /// Command-line name of the context.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DashboardChart => "dashboard-chart",
            Self::MonthlySummary => "monthly-summary",
            Self::DailyReport => "daily-report",
            Self::PotensiSpWindow => "potensi-sp-window",
            Self::ProblemWindow => "problem-window",
            Self::GenericCurrentMonth(GenericMonthVariant::ToDate) => "current-month-to-date",
            Self::GenericCurrentMonth(GenericMonthVariant::ToYesterday) => {
                "current-month-to-yesterday"
            }
        }
    }
}

impl fmt::Display for ReportingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportingContext {
    type Err = SlaDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|context| context.as_str() == needle).ok_or_else(|| {
            SlaDashError::InvalidInput(format!(
                "Invalid ReportingContext: {s} (expected one of: {})",
                Self::ALL.map(|c| c.as_str()).join(", ")
            ))
        })
    }
}
