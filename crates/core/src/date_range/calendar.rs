//! Month arithmetic on `NaiveDate`.
//!
//! All helpers are total: month lengths, leap years and the December/January
//! boundary fall out of day arithmetic instead of month-number juggling.

use chrono::{Datelike, Days, NaiveDate};

/// The reporting "rollover" day: on the 1st the current month has no data
/// yet, so month windows point at the previous month.
pub fn is_rollover_day(today: NaiveDate) -> bool {
    today.day() == 1
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    // 32 days past the 1st always lands in the following month
    let next_month = first_day_of_month(first_day_of_month(date) + Days::new(32));
    next_month - Days::new(1)
}

pub fn previous_month_end(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) - Days::new(1)
}

pub fn previous_month_start(date: NaiveDate) -> NaiveDate {
    first_day_of_month(previous_month_end(date))
}
