//! Scriptable clipboard platform and notification sink.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sladash_core::{ClipboardPlatform, NotificationSink};
use sladash_domain::{FieldId, Notification, Result as DomainResult, SelectionMode, SlaDashError};

/// How the async clipboard tier behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModernBehaviour {
    /// No secure context or no clipboard API
    Unavailable,
    /// Present and the write succeeds
    Succeeds,
    /// Present but the write is rejected
    Rejects,
}

/// How the legacy copy command behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyBehaviour {
    Succeeds,
    /// The command returns `false`
    Refused,
    /// The command raises
    Errors,
}

#[derive(Default)]
struct PlatformState {
    next_id: u64,
    attached: BTreeSet<FieldId>,
    created: Vec<FieldId>,
    manual_fields: Vec<FieldId>,
    selections: Vec<SelectionMode>,
    written: Vec<String>,
    manual_texts: Vec<(String, String)>,
}

/// In-memory document that records every call the exporter makes.
#[derive(Clone)]
pub struct RecordingPlatform {
    modern: ModernBehaviour,
    legacy: LegacyBehaviour,
    state: Arc<Mutex<PlatformState>>,
}

impl RecordingPlatform {
    pub fn new(modern: ModernBehaviour, legacy: LegacyBehaviour) -> Self {
        Self { modern, legacy, state: Arc::default() }
    }

    /// Fields currently attached to the document.
    pub fn attached_fields(&self) -> Vec<FieldId> {
        self.state.lock().attached.iter().copied().collect()
    }

    /// Every off-screen field ever attached.
    pub fn created_fields(&self) -> Vec<FieldId> {
        self.state.lock().created.clone()
    }

    pub fn manual_fields(&self) -> Vec<FieldId> {
        self.state.lock().manual_fields.clone()
    }

    /// `(text, instruction)` for each manual field shown.
    pub fn manual_texts(&self) -> Vec<(String, String)> {
        self.state.lock().manual_texts.clone()
    }

    pub fn selections(&self) -> Vec<SelectionMode> {
        self.state.lock().selections.clone()
    }

    /// Text accepted by the async clipboard tier.
    pub fn written(&self) -> Vec<String> {
        self.state.lock().written.clone()
    }

    fn attach(&self, manual: bool) -> FieldId {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = FieldId(state.next_id);
        state.attached.insert(id);
        if manual {
            state.manual_fields.push(id);
        } else {
            state.created.push(id);
        }
        id
    }
}

#[async_trait]
impl ClipboardPlatform for RecordingPlatform {
    fn supports_async_clipboard(&self) -> bool {
        self.modern != ModernBehaviour::Unavailable
    }

    async fn write_text(&self, text: &str) -> DomainResult<()> {
        match self.modern {
            ModernBehaviour::Succeeds => {
                self.state.lock().written.push(text.to_string());
                Ok(())
            }
            ModernBehaviour::Rejects => {
                Err(SlaDashError::Platform("write permission denied".to_string()))
            }
            ModernBehaviour::Unavailable => {
                Err(SlaDashError::Platform("clipboard API missing".to_string()))
            }
        }
    }

    fn attach_offscreen_field(&self, _text: &str) -> DomainResult<FieldId> {
        Ok(self.attach(false))
    }

    fn select_field(&self, _field: FieldId, mode: SelectionMode) -> DomainResult<()> {
        self.state.lock().selections.push(mode);
        Ok(())
    }

    fn exec_copy(&self, field: FieldId) -> DomainResult<bool> {
        assert!(self.is_field_attached(field), "copy ran against a detached field");
        match self.legacy {
            LegacyBehaviour::Succeeds => Ok(true),
            LegacyBehaviour::Refused => Ok(false),
            LegacyBehaviour::Errors => {
                Err(SlaDashError::Platform("execCommand threw".to_string()))
            }
        }
    }

    fn remove_field(&self, field: FieldId) {
        self.state.lock().attached.remove(&field);
    }

    fn is_field_attached(&self, field: FieldId) -> bool {
        self.state.lock().attached.contains(&field)
    }

    fn show_manual_field(&self, text: &str, instruction: &str) -> DomainResult<FieldId> {
        let id = self.attach(true);
        self.state.lock().manual_texts.push((text.to_string(), instruction.to_string()));
        Ok(id)
    }
}

/// Collects notifications.
#[derive(Clone, Default)]
pub struct RecordingSink {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received.lock().push(notification);
    }
}
