//! Clipboard export state machine
//!
//! ```text
//! TryModern ──fail──▶ TryLegacy ──fail──▶ ManualFallback
//!     │ ok                │ ok                  │
//!     ▼                   ▼                     ▼
//! Done(ClipboardApi)  Done(LegacyExecCommand)  Done(ManualFallback, failed)
//! ```
//!
//! Each strategy is an attempt that yields a success flag; errors raised by
//! the platform are logged and turned into a transition. The terminal state
//! sends exactly one notification, and [`ClipboardExporter::copy`] never
//! returns an error.
//!
//! No particular executor is required. Inside a multi-threaded Tokio runtime
//! the blocking legacy copy runs under `block_in_place`, and without a
//! runtime the manual field is expired from a plain thread.

use std::sync::Arc;
use std::time::Duration;

use sladash_domain::constants::MANUAL_FALLBACK_DELAY_SECS;
use sladash_domain::{CopyResult, CopyStrategy, FieldId, Notification, SelectionMode};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, info, warn};

use super::ports::{ClipboardPlatform, NotificationSink};

pub(crate) const MANUAL_COPY_INSTRUCTION: &str =
    "Tekan Ctrl+C (atau Cmd+C) untuk menyalin teks yang sudah dipilih.";
const COPIED_TITLE: &str = "Berhasil disalin";
const COPIED_DESCRIPTION: &str = "Laporan SLA sudah disalin ke clipboard.";
const MANUAL_TITLE: &str = "Salin manual";
const MANUAL_DESCRIPTION: &str =
    "Clipboard tidak dapat diakses. Teks laporan sudah dipilih, silakan salin secara manual.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportState {
    TryModern,
    TryLegacy,
    ManualFallback,
    Done(CopyResult),
}

/// Copies text using the best mechanism the platform offers.
pub struct ClipboardExporter {
    platform: Arc<dyn ClipboardPlatform>,
    notifier: Arc<dyn NotificationSink>,
    selection_mode: SelectionMode,
    manual_field_ttl: Duration,
}

impl ClipboardExporter {
    /// Create an exporter with standard selection and the default 5 second
    /// manual field lifetime.
    pub fn new(platform: Arc<dyn ClipboardPlatform>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            platform,
            notifier,
            selection_mode: SelectionMode::Standard,
            manual_field_ttl: Duration::from_secs(MANUAL_FALLBACK_DELAY_SECS),
        }
    }

    /// Use the touch-platform selection technique for the legacy field.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn with_manual_field_ttl(mut self, ttl: Duration) -> Self {
        self.manual_field_ttl = ttl;
        self
    }

    /// Copy `text`, degrading from the async clipboard to the legacy command
    /// to a manual-copy field.
    pub async fn copy(&self, text: &str) -> CopyResult {
        let mut state = ExportState::TryModern;

        loop {
            let next = match state {
                ExportState::TryModern => {
                    if self.try_modern(text).await {
                        ExportState::Done(CopyResult::copied(CopyStrategy::ClipboardApi))
                    } else {
                        ExportState::TryLegacy
                    }
                }
                ExportState::TryLegacy => {
                    if self.try_legacy(text) {
                        ExportState::Done(CopyResult::copied(CopyStrategy::LegacyExecCommand))
                    } else {
                        ExportState::ManualFallback
                    }
                }
                ExportState::ManualFallback => ExportState::Done(self.manual_fallback(text)),
                ExportState::Done(result) => {
                    self.notify_outcome(result);
                    return result;
                }
            };

            debug!(from = ?state, to = ?next, "clipboard export transition");
            state = next;
        }
    }

    async fn try_modern(&self, text: &str) -> bool {
        if !self.platform.supports_async_clipboard() {
            debug!("async clipboard unavailable (no secure context or API)");
            return false;
        }

        match self.platform.write_text(text).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "async clipboard write failed");
                false
            }
        }
    }

    fn try_legacy(&self, text: &str) -> bool {
        let field = match OffscreenField::attach(self.platform.as_ref(), text) {
            Ok(field) => field,
            Err(err) => {
                warn!(error = %err, "could not attach off-screen copy field");
                return false;
            }
        };

        let outcome = run_blocking(|| {
            self.platform
                .select_field(field.id, self.selection_mode)
                .and_then(|()| self.platform.exec_copy(field.id))
        });
        drop(field);

        match outcome {
            Ok(true) => true,
            Ok(false) => {
                warn!("legacy copy command was refused");
                false
            }
            Err(err) => {
                warn!(error = %err, "legacy copy command failed");
                false
            }
        }
    }

    fn manual_fallback(&self, text: &str) -> CopyResult {
        match self.platform.show_manual_field(text, MANUAL_COPY_INSTRUCTION) {
            Ok(field) => self.schedule_manual_field_removal(field),
            Err(err) => warn!(error = %err, "could not show manual copy field"),
        }
        CopyResult::manual_fallback()
    }

    fn schedule_manual_field_removal(&self, field: FieldId) {
        let platform = Arc::clone(&self.platform);
        let ttl = self.manual_field_ttl;

        if let Ok(handle) = Handle::try_current() {
            handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                expire_manual_field(platform.as_ref(), field);
            });
        } else {
            debug!(%field, "no tokio runtime, expiring manual field from a thread");
            std::thread::spawn(move || {
                std::thread::sleep(ttl);
                expire_manual_field(platform.as_ref(), field);
            });
        }
    }

    fn notify_outcome(&self, result: CopyResult) {
        info!(strategy = %result.strategy, succeeded = result.succeeded, "clipboard export finished");

        let notification = if result.succeeded {
            Notification::success(COPIED_TITLE, COPIED_DESCRIPTION)
        } else {
            Notification::error(MANUAL_TITLE, MANUAL_DESCRIPTION)
        };
        self.notifier.notify(notification);
    }
}

fn expire_manual_field(platform: &dyn ClipboardPlatform, field: FieldId) {
    if platform.is_field_attached(field) {
        platform.remove_field(field);
        debug!(%field, "manual copy field expired");
    }
}

/// Run a blocking platform call without stalling other tasks on a
/// multi-threaded runtime. `block_in_place` is unavailable on the
/// current-thread flavour, where the call simply runs inline.
fn run_blocking<T>(call: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(call)
        }
        _ => call(),
    }
}

/// Off-screen field that is detached when dropped, including during unwind.
struct OffscreenField<'a> {
    platform: &'a dyn ClipboardPlatform,
    id: FieldId,
}

impl<'a> OffscreenField<'a> {
    fn attach(platform: &'a dyn ClipboardPlatform, text: &str) -> sladash_domain::Result<Self> {
        let id = platform.attach_offscreen_field(text)?;
        Ok(Self { platform, id })
    }
}

impl Drop for OffscreenField<'_> {
    fn drop(&mut self) {
        self.platform.remove_field(self.id);
    }
}
