//! Command-line interface definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use sladash_domain::{ReportingContext, SlaDashError};

/// SLA Dash - reporting periods and SLA-below-target reports.
#[derive(Parser, Debug)]
#[command(name = "sladash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter override (e.g. `debug`, `sladash_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the date range of a reporting context
    Range(RangeArgs),

    /// Print the monthly summary period and label
    Period(PeriodArgs),

    /// Compose the sites-below-target report
    Report(ReportArgs),
}

/// Shared `--today` override.
#[derive(Args, Debug, Clone, Default)]
pub struct TodayArg {
    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Reporting context, e.g. `dashboard-chart`, `daily-report`,
    /// `current-month-to-date`
    pub context: ReportingContext,

    #[command(flatten)]
    pub today: TodayArg,

    /// Print `{"startDate": .., "endDate": ..}` instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PeriodArgs {
    #[command(flatten)]
    pub today: TodayArg,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Context whose date range is queried
    #[arg(long, default_value = "dashboard-chart")]
    pub context: ReportingContext,

    #[command(flatten)]
    pub today: TodayArg,

    /// Read the payload from a JSON file instead of the API
    #[arg(long)]
    pub payload: Option<PathBuf>,

    /// Copy the report to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_today(raw: &str) -> Result<NaiveDate, SlaDashError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| SlaDashError::InvalidInput(format!("Invalid date '{raw}': {e}")))
}
