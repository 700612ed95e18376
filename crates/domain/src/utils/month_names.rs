//! Indonesian month names used by report labels.

use chrono::Datelike;

use crate::constants::INDONESIAN_MONTHS;

/// Lowercase Indonesian name of the date's calendar month.
pub fn indonesian_month_name<D: Datelike>(date: &D) -> &'static str {
    // month0() is always 0..=11
    INDONESIAN_MONTHS[date.month0() as usize]
}

/// `"<month name> <year>"`, e.g. `"november 2025"`.
pub fn month_year_label<D: Datelike>(date: &D) -> String {
    format!("{} {}", indonesian_month_name(date), date.year())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn maps_every_month() {
        let names: Vec<_> = (1..=12)
            .map(|m| indonesian_month_name(&NaiveDate::from_ymd_opt(2025, m, 1).unwrap()))
            .collect();
        assert_eq!(names, INDONESIAN_MONTHS.to_vec());
        assert_eq!(names[0], "januari");
        assert_eq!(names[11], "desember");
    }

    #[test]
    fn label_has_name_and_year() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        assert_eq!(month_year_label(&date), "agustus 2024");
    }
}
