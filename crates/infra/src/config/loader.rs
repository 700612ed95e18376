//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `SLADASH_API_BASE_URL` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! ## Environment Variables
//! - `SLADASH_API_BASE_URL`: API base URL (required for the env source)
//! - `SLADASH_API_TIMEOUT`: request timeout in seconds
//! - `SLADASH_API_MAX_ATTEMPTS`: attempts per request
//! - `SLADASH_LOG_LEVEL`: default log filter
//! - `SLADASH_LOG_JSON`: JSON log output (true/false)
//! - `SLADASH_MANUAL_FALLBACK_SECONDS`: manual copy field lifetime
//! - `SLADASH_TOUCH_PLATFORM`: touch selection for the legacy copy field
//! - `SLADASH_COPY_COMMAND`: explicit copy utility, whitespace separated
//! - `SLADASH_TIMEZONE`: IANA timezone defining "today"
//!
//! ## File Locations
//! `config.{json,toml}` or `sladash.{json,toml}` in the working directory, its
//! parent and grandparent, then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sladash_domain::{
    ApiConfig, ClipboardConfig, Config, LoggingConfig, ReportConfig, Result, SlaDashError,
};

const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "sladash.json", "sladash.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SlaDashError::Config` if an environment value or the probed file
/// is invalid. A missing source is not an error.
pub fn load() -> Result<Config> {
    if std::env::var_os("SLADASH_API_BASE_URL").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No configuration source found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `SLADASH_API_BASE_URL` is required; every other variable falls back to its
/// default.
///
/// # Errors
/// Returns `SlaDashError::Config` when the base URL is missing or a value
/// does not parse.
pub fn load_from_env() -> Result<Config> {
    let api_defaults = ApiConfig::default();
    let logging_defaults = LoggingConfig::default();
    let clipboard_defaults = ClipboardConfig::default();

    Ok(Config {
        api: ApiConfig {
            base_url: env_var("SLADASH_API_BASE_URL")?,
            timeout_seconds: env_parse("SLADASH_API_TIMEOUT", api_defaults.timeout_seconds)?,
            max_attempts: env_parse("SLADASH_API_MAX_ATTEMPTS", api_defaults.max_attempts)?,
        },
        logging: LoggingConfig {
            level: std::env::var("SLADASH_LOG_LEVEL").unwrap_or(logging_defaults.level),
            json: env_bool("SLADASH_LOG_JSON", logging_defaults.json),
        },
        clipboard: ClipboardConfig {
            manual_fallback_seconds: env_parse(
                "SLADASH_MANUAL_FALLBACK_SECONDS",
                clipboard_defaults.manual_fallback_seconds,
            )?,
            touch_platform: env_bool("SLADASH_TOUCH_PLATFORM", clipboard_defaults.touch_platform),
            copy_command: std::env::var("SLADASH_COPY_COMMAND")
                .ok()
                .map(|raw| raw.split_whitespace().map(str::to_string).collect::<Vec<_>>())
                .filter(|parts| !parts.is_empty()),
        },
        report: ReportConfig {
            timezone: std::env::var("SLADASH_TIMEZONE")
                .unwrap_or_else(|_| ReportConfig::default().timezone),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. The format follows the
/// file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SlaDashError::Config` if no file is found or it cannot be parsed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(SlaDashError::Config(format!("Config file not found: {}", p.display())));
        }
        None => probe_config_paths().ok_or_else(|| {
            SlaDashError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SlaDashError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SlaDashError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SlaDashError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SlaDashError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|candidate| candidate.is_file())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SlaDashError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional variable, keeping `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| SlaDashError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
