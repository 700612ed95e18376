//! Reporting date-range derivation
//!
//! Every rule is a pure function of an injected calendar date ("today").
//! Callers obtain that date from a [`Clock`](crate::Clock) port, never from a
//! process-wide wall clock, so each rule can be tested for any day.

pub mod calendar;
pub mod policy;

pub use calendar::{
    first_day_of_month, is_rollover_day, last_day_of_month, previous_month_end,
    previous_month_start,
};
pub use policy::{
    current_month_to_date_range, current_month_to_yesterday_range, daily_report_range,
    dashboard_chart_range, monthly_summary, monthly_summary_label, monthly_summary_period,
    potensi_sp_window_range, problem_window_range, range_for, MonthlySummaryPeriod,
};
