//! Per-context date-range rules.
//!
//! | Context | on the 1st | any other day |
//! |---|---|---|
//! | dashboard chart, problem window, Potensi-SP window | previous month | current month |
//! | current month to date | last 2 days of previous month | 1st .. today |
//! | current month to yesterday | previous month | 1st .. yesterday |
//! | monthly summary | previous month | current month |
//! | daily report | today-2 .. today-1 | today-2 .. today-1 |

use chrono::{Days, NaiveDate};
use serde::Serialize;
use sladash_domain::{month_year_label, DateRange, GenericMonthVariant, ReportingContext};

use super::calendar::{
    first_day_of_month, is_rollover_day, last_day_of_month, previous_month_end,
};

/// Resolve the window for any reporting context.
///
/// `MonthlySummary` resolves to the whole month named by
/// [`monthly_summary_period`].
pub fn range_for(context: ReportingContext, today: NaiveDate) -> DateRange {
    match context {
        ReportingContext::DashboardChart => dashboard_chart_range(today),
        ReportingContext::ProblemWindow => problem_window_range(today),
        ReportingContext::PotensiSpWindow => potensi_sp_window_range(today),
        ReportingContext::MonthlySummary => monthly_summary(today).range,
        ReportingContext::DailyReport => daily_report_range(today),
        ReportingContext::GenericCurrentMonth(GenericMonthVariant::ToDate) => {
            current_month_to_date_range(today)
        }
        ReportingContext::GenericCurrentMonth(GenericMonthVariant::ToYesterday) => {
            current_month_to_yesterday_range(today)
        }
    }
}

/// Month the dashboard is "on": the previous month on the 1st.
fn reporting_month_anchor(today: NaiveDate) -> NaiveDate {
    if is_rollover_day(today) {
        previous_month_end(today)
    } else {
        today
    }
}

fn whole_month(anchor: NaiveDate) -> DateRange {
    DateRange::new(first_day_of_month(anchor), last_day_of_month(anchor))
}

pub fn dashboard_chart_range(today: NaiveDate) -> DateRange {
    whole_month(reporting_month_anchor(today))
}

pub fn problem_window_range(today: NaiveDate) -> DateRange {
    dashboard_chart_range(today)
}

pub fn potensi_sp_window_range(today: NaiveDate) -> DateRange {
    whole_month(reporting_month_anchor(today))
}

/// Current month up to and including today.
///
/// On the 1st this narrows to the final two days of the previous month.
pub fn current_month_to_date_range(today: NaiveDate) -> DateRange {
    if is_rollover_day(today) {
        let end = previous_month_end(today);
        return DateRange::new(end - Days::new(1), end);
    }
    DateRange::new(first_day_of_month(today), today)
}

/// Current month up to yesterday; the whole previous month on the 1st.
pub fn current_month_to_yesterday_range(today: NaiveDate) -> DateRange {
    if is_rollover_day(today) {
        return whole_month(previous_month_end(today));
    }
    DateRange::new(first_day_of_month(today), today - Days::new(1))
}

/// One-day-wide window ending yesterday, independent of the day of month.
pub fn daily_report_range(today: NaiveDate) -> DateRange {
    DateRange::new(today - Days::new(2), today - Days::new(1))
}

/// Monthly summary selection, as consumed by the summary endpoint and its
/// heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryPeriod {
    /// `YYYY-MM`
    pub period: String,
    /// Indonesian month name and year, e.g. `november 2025`
    pub label: String,
    pub range: DateRange,
}

pub fn monthly_summary(today: NaiveDate) -> MonthlySummaryPeriod {
    let anchor = reporting_month_anchor(today);
    MonthlySummaryPeriod {
        period: anchor.format("%Y-%m").to_string(),
        label: month_year_label(&anchor),
        range: whole_month(anchor),
    }
}

pub fn monthly_summary_period(today: NaiveDate) -> String {
    monthly_summary(today).period
}

pub fn monthly_summary_label(today: NaiveDate) -> String {
    monthly_summary(today).label
}
