//! Plain-text rendering of the sites-below-target payload.
//!
//! The output is meant to be pasted into a messaging client, so it uses
//! `*bold*` / `_italic_` markers and a fixed-width rule between sections.
//! Rendering is pure: the same payload always yields the same bytes.

use std::fmt::Write as _;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use sladash_domain::constants::{
    REPORT_DEFAULT_PERIOD_LABEL, REPORT_FIELD_SEPARATOR, REPORT_FOOTER, REPORT_RULE_CHAR,
    REPORT_RULE_WIDTH, SLA_TARGET_PERCENT,
};
use sladash_domain::{
    indonesian_month_name, BatteryCategory, SiteSlaEntry, SlaBelowTargetPayload, StatusSp,
};

lazy_static! {
    static ref ISO_DATE: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}").expect("static regex is valid");
}

/// Global SP counts across all battery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpSummary {
    pub total_sites: u32,
    pub potensi_sp: usize,
    pub clear_sp: usize,
}

/// Count Potensi SP entries; every other entry counts as Clear SP.
pub fn sp_summary(payload: &SlaBelowTargetPayload) -> SpSummary {
    let (potensi_sp, all) = payload
        .battery_categories
        .entries()
        .fold((0, 0), |(potensi, all), entry| {
            (potensi + usize::from(entry.status_sp == StatusSp::PotensiSp), all + 1)
        });
    SpSummary { total_sites: payload.total_sites, potensi_sp, clear_sp: all - potensi_sp }
}

/// `"<MONTH> <YEAR>"` from the first ISO date in `message`, or the default
/// label when there is none or it is not a real calendar date.
pub fn report_month_label(message: &str) -> String {
    ISO_DATE
        .find(message)
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
        .map_or_else(
            || REPORT_DEFAULT_PERIOD_LABEL.to_string(),
            |date| format!("{} {}", indonesian_month_name(&date).to_uppercase(), date.format("%Y")),
        )
}

/// One site line: identifier and SLA, then downtime and problem when present.
pub fn format_site_line(entry: &SiteSlaEntry) -> String {
    let mut line = format!("{} - SLA {}%", entry.site, two_decimals(entry.sla));

    let downtime = entry.downtime.trim();
    if !downtime.is_empty() {
        let _ = write!(line, "{REPORT_FIELD_SEPARATOR}Downtime: {downtime}");
    }

    if let Some(problem) = entry.problem.as_deref().filter(|p| !p.trim().is_empty()) {
        let _ = write!(line, "{REPORT_FIELD_SEPARATOR}Problem: {}", problem.trim());
    }

    line
}

/// `value` with two decimals, rounding exact ties away from zero as the
/// dashboard's `toFixed(2)` does (`{:.2}` alone rounds them to even).
fn two_decimals(value: f64) -> String {
    // Only odd multiples of 1/8 sit exactly halfway between two cents.
    let eighths = value * 8.0;
    let exact_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    let rounded = if exact_tie { (value * 100.0).round() / 100.0 } else { value };
    format!("{rounded:.2}")
}

/// Render the whole report.
pub fn compose_below_target_report(payload: &SlaBelowTargetPayload) -> String {
    let mut sections = vec![header_section(payload), summary_section(&sp_summary(payload))];
    sections.extend(
        payload
            .battery_categories
            .iter()
            .filter(|(_, category)| !category.is_empty())
            .map(|(_, category)| category_section(category)),
    );
    sections.push(REPORT_FOOTER.to_string());

    let rule = horizontal_rule();
    sections.join(&format!("\n{rule}\n"))
}

fn horizontal_rule() -> String {
    std::iter::repeat(REPORT_RULE_CHAR).take(REPORT_RULE_WIDTH).collect()
}

fn header_section(payload: &SlaBelowTargetPayload) -> String {
    format!(
        "*LAPORAN SLA DI BAWAH {SLA_TARGET_PERCENT}% - {}*\n{}",
        report_month_label(&payload.message),
        payload.message
    )
}

fn summary_section(summary: &SpSummary) -> String {
    format!(
        "*RINGKASAN*\nTotal Site: {}\nPotensi SP: {}\nClear SP: {}",
        summary.total_sites, summary.potensi_sp, summary.clear_sp
    )
}

fn category_section(category: &BatteryCategory) -> String {
    let (potensi, clear) = category.partition_by_status();

    let mut blocks = vec![format!(
        "*{} ({} SITE)*",
        category.display_name.to_uppercase(),
        category.total_sites
    )];
    if !potensi.is_empty() {
        blocks.push(status_block("POTENSI SP", &potensi));
    }
    if !clear.is_empty() {
        blocks.push(status_block("CLEAR SP", &clear));
    }
    blocks.join("\n\n")
}

fn status_block(title: &str, entries: &[&SiteSlaEntry]) -> String {
    let mut block = format!("*{title}* ({})", entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let _ = write!(block, "\n{}. {}", index + 1, format_site_line(entry));
    }
    block
}
