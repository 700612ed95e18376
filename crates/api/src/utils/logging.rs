use std::time::Duration;

use sladash_domain::SlaDashError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"report"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `SlaDashError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SlaDashError) -> &'static str {
    match error {
        SlaDashError::Config(_) => "config",
        SlaDashError::Network(_) => "network",
        SlaDashError::Platform(_) => "platform",
        SlaDashError::NotFound(_) => "not_found",
        SlaDashError::InvalidInput(_) => "invalid_input",
        SlaDashError::Serialization(_) => "serialization",
        SlaDashError::Internal(_) => "internal",
    }
}
