//! Configuration structures
//!
//! Every section has defaults so a partial JSON/TOML file (or none at all)
//! still yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS,
    DEFAULT_REPORT_TIMEZONE, MANUAL_FALLBACK_DELAY_SECS,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub clipboard: ClipboardConfig,
    pub report: ReportConfig,
}

/// Remote SLA API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Total attempts per request (initial try + retries)
    pub max_attempts: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_API_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

/// Clipboard export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Seconds before the manual-copy field is removed
    pub manual_fallback_seconds: u64,
    pub touch_platform: bool,
    /// Explicit legacy copy utility, e.g. `["xclip", "-selection", "clipboard"]`
    pub copy_command: Option<Vec<String>>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            manual_fallback_seconds: MANUAL_FALLBACK_DELAY_SECS,
            touch_platform: false,
            copy_command: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// IANA timezone that defines "today" for reporting
    pub timezone: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_REPORT_TIMEZONE.to_string() }
    }
}
