//! Clipboard export outcomes and user notifications.

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_enum_conversions;

/// Mechanism used to place text on the clipboard, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum CopyStrategy {
    /// Secure-context asynchronous clipboard write
    ClipboardApi,
    /// Off-screen field plus the legacy copy command
    LegacyExecCommand,
    /// Visible field; the user copies by hand
    ManualFallback,
}

impl_domain_enum_conversions!(CopyStrategy {
    ClipboardApi => "clipboard_api",
    LegacyExecCommand => "legacy_exec_command",
    ManualFallback => "manual_fallback",
});

/// Terminal outcome of one clipboard export.
///
/// Transient: drives a single notification and is then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CopyResult {
    pub strategy: CopyStrategy,
    pub succeeded: bool,
}

impl CopyResult {
    pub const fn copied(strategy: CopyStrategy) -> Self {
        Self { strategy, succeeded: true }
    }

    /// Manual fallback never counts as a successful copy.
    pub const fn manual_fallback() -> Self {
        Self { strategy: CopyStrategy::ManualFallback, succeeded: false }
    }
}

/// Text-selection technique for a platform field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Range-based selection needed by touch-based mobile browsers
    Touch,
    /// Plain select-all
    #[default]
    Standard,
}

impl SelectionMode {
    pub const fn for_platform(is_touch_platform: bool) -> Self {
        if is_touch_platform {
            Self::Touch
        } else {
            Self::Standard
        }
    }
}

/// Handle to a text field attached by a clipboard platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

impl_domain_enum_conversions!(NotificationLevel {
    Success => "success",
    Info => "info",
    Error => "error",
});

/// Message for the notification sink, keyed by a short title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { level, title: title.into(), description: description.into() }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, description)
    }
}
