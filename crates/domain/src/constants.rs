//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// SLA thresholds
pub const SLA_TARGET_PERCENT: f64 = 95.5;

// Indonesian month names, indexed 0-11 by calendar month
pub const INDONESIAN_MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maret",
    "april",
    "mei",
    "juni",
    "juli",
    "agustus",
    "september",
    "oktober",
    "november",
    "desember",
];

// Report text layout
pub const REPORT_RULE_CHAR: char = '━';
pub const REPORT_RULE_WIDTH: usize = 30;
pub const REPORT_FIELD_SEPARATOR: &str = " | ";
pub const REPORT_DEFAULT_PERIOD_LABEL: &str = "PERIODE BERJALAN";
pub const REPORT_FOOTER: &str = "_Generated by SLA Dash Sundaya - ECC Master Dashboard_";

// SP status labels as they appear on the wire
pub const STATUS_POTENSI_SP: &str = "Potensi SP";
pub const STATUS_CLEAR_SP: &str = "Clear SP";

// Clipboard export
pub const MANUAL_FALLBACK_DELAY_SECS: u64 = 5;
pub const LEGACY_COPY_TIMEOUT_MS: u64 = 2_000;

// Reporting calendar
pub const DEFAULT_REPORT_TIMEZONE: &str = "Asia/Jakarta";

// Remote API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 3;
