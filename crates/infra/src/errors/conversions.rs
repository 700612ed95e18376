//! Conversions from external infrastructure errors into domain errors.

use reqwest::{Error as HttpError, StatusCode};
use serde_json::Error as JsonError;
use sladash_domain::SlaDashError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SlaDashError);

impl From<InfraError> for SlaDashError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SlaDashError> for InfraError {
    fn from(value: SlaDashError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSlaDashError {
    fn into_sladash(self) -> SlaDashError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SlaDashError */
/* -------------------------------------------------------------------------- */

impl IntoSlaDashError for HttpError {
    fn into_sladash(self) -> SlaDashError {
        if self.is_timeout() {
            return SlaDashError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SlaDashError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return SlaDashError::Serialization(format!("invalid response body: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status);
        }

        SlaDashError::Network(self.to_string())
    }
}

/// Domain error for an unsuccessful HTTP status.
pub fn status_error(status: StatusCode) -> SlaDashError {
    let code = status.as_u16();
    let message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

    match code {
        404 => SlaDashError::NotFound(message),
        429 => SlaDashError::Network(message),
        400..=499 => SlaDashError::InvalidInput(message),
        _ => SlaDashError::Network(message),
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_sladash())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → SlaDashError */
/* -------------------------------------------------------------------------- */

impl IntoSlaDashError for JsonError {
    fn into_sladash(self) -> SlaDashError {
        SlaDashError::Serialization(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_sladash())
    }
}

impl IntoSlaDashError for TomlError {
    fn into_sladash(self) -> SlaDashError {
        SlaDashError::Config(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_sladash())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → SlaDashError */
/* -------------------------------------------------------------------------- */

impl IntoSlaDashError for std::io::Error {
    fn into_sladash(self) -> SlaDashError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => SlaDashError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                SlaDashError::Platform(format!("permission denied: {self}"))
            }
            ErrorKind::TimedOut => SlaDashError::Platform(format!("operation timed out: {self}")),
            _ => SlaDashError::Platform(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        Self(value.into_sladash())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
