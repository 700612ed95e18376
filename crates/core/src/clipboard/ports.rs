//! Port interfaces for clipboard export
//!
//! These traits define the boundary between the export state machine and the
//! host platform (browser document, desktop clipboard, terminal).

use async_trait::async_trait;
use sladash_domain::{FieldId, Notification, Result, SelectionMode};

/// Platform clipboard capabilities used by
/// [`ClipboardExporter`](super::ClipboardExporter).
#[async_trait]
pub trait ClipboardPlatform: Send + Sync {
    /// Whether a secure context with an async clipboard write API is present
    fn supports_async_clipboard(&self) -> bool;

    /// Async clipboard write; resolves once the platform grants or denies it
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Attach an off-screen, non-interactive text field holding `text`
    fn attach_offscreen_field(&self, text: &str) -> Result<FieldId>;

    /// Select the field's full contents
    fn select_field(&self, field: FieldId, mode: SelectionMode) -> Result<()>;

    /// Run the legacy copy command against the selected field.
    ///
    /// `Ok(false)` means the platform refused the command without raising.
    fn exec_copy(&self, field: FieldId) -> Result<bool>;

    /// Detach a field; unknown or already removed fields are ignored
    fn remove_field(&self, field: FieldId);

    /// Whether the field is still attached
    fn is_field_attached(&self, field: FieldId) -> bool;

    /// Show a visible, focused, pre-selected field with `text` and an
    /// instruction for copying by hand
    fn show_manual_field(&self, text: &str, instruction: &str) -> Result<FieldId>;
}

/// Fire-and-forget sink for user-facing notifications
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
