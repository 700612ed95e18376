//! Native clipboard platform
//!
//! Maps the three export tiers onto a desktop session:
//! - async clipboard: the OS clipboard through `arboard`, run on a blocking
//!   thread. Only on macOS and Windows: an X11/Wayland selection lives only
//!   as long as the process that set it, so there the forking copy utilities
//!   of the next tier take over instead.
//! - legacy field: the text staged in a temp file and piped into a copy
//!   utility (`pbcopy`, `clip`, `wl-copy`, `xclip`, `xsel`)
//! - manual field: the text framed on the terminal, plus a staged copy the
//!   user can open until the field expires

use std::collections::HashMap;
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use sladash_core::ClipboardPlatform;
use sladash_domain::constants::LEGACY_COPY_TIMEOUT_MS;
use sladash_domain::{ClipboardConfig, FieldId, Result, SelectionMode, SlaDashError};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::errors::InfraError;

const FRAME_WIDTH: usize = 60;

struct StagedField {
    file: NamedTempFile,
    selected: bool,
}

/// Desktop [`ClipboardPlatform`].
pub struct NativeClipboard {
    copy_commands: Vec<Vec<String>>,
    copy_timeout: Duration,
    system_clipboard: bool,
    fields: Mutex<HashMap<FieldId, StagedField>>,
    next_field: AtomicU64,
    manual_output: Mutex<Box<dyn Write + Send>>,
}

impl NativeClipboard {
    /// Platform with the default copy utilities for this OS and manual
    /// output on stderr.
    pub fn new() -> Self {
        Self {
            copy_commands: default_copy_commands(),
            copy_timeout: Duration::from_millis(LEGACY_COPY_TIMEOUT_MS),
            system_clipboard: os_clipboard_outlives_process(),
            fields: Mutex::new(HashMap::new()),
            next_field: AtomicU64::new(1),
            manual_output: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    pub fn from_config(config: &ClipboardConfig) -> Self {
        let platform = Self::new();
        match &config.copy_command {
            Some(command) if !command.is_empty() => platform.with_copy_commands(vec![command.clone()]),
            _ => platform,
        }
    }

    /// Replace the legacy copy utilities, tried in order.
    pub fn with_copy_commands(mut self, commands: Vec<Vec<String>>) -> Self {
        self.copy_commands = commands.into_iter().filter(|c| !c.is_empty()).collect();
        self
    }

    pub fn with_copy_timeout(mut self, timeout: Duration) -> Self {
        self.copy_timeout = timeout;
        self
    }

    /// Skip the OS clipboard tier, e.g. on a headless host.
    pub fn without_system_clipboard(mut self) -> Self {
        self.system_clipboard = false;
        self
    }

    /// Where the manual-copy field is drawn.
    pub fn with_manual_output(mut self, output: Box<dyn Write + Send>) -> Self {
        self.manual_output = Mutex::new(output);
        self
    }

    /// Path of a staged field, if attached.
    pub fn staged_path(&self, field: FieldId) -> Option<PathBuf> {
        self.fields.lock().get(&field).map(|staged| staged.file.path().to_path_buf())
    }

    fn stage(&self, text: &str) -> Result<FieldId> {
        let mut file = tempfile::Builder::new()
            .prefix("sladash-report-")
            .suffix(".txt")
            .tempfile()
            .map_err(InfraError::from)?;
        file.write_all(text.as_bytes()).map_err(InfraError::from)?;
        file.flush().map_err(InfraError::from)?;

        let id = FieldId(self.next_field.fetch_add(1, Ordering::Relaxed));
        self.fields.lock().insert(id, StagedField { file, selected: false });
        Ok(id)
    }

    fn reopen(&self, field: FieldId) -> Result<File> {
        let fields = self.fields.lock();
        let staged = fields
            .get(&field)
            .ok_or_else(|| SlaDashError::NotFound(format!("{field} is not attached")))?;
        let mut file = staged.file.reopen().map_err(InfraError::from)?;
        file.seek(SeekFrom::Start(0)).map_err(InfraError::from)?;
        Ok(file)
    }

    /// Pipe the staged text into one utility.
    ///
    /// `Ok(None)` when the utility is not installed.
    fn run_copy_command(&self, command: &[String], field: FieldId) -> Result<Option<bool>> {
        let Some((program, args)) = command.split_first() else {
            return Ok(None);
        };

        let stdin = self.reopen(field)?;
        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(%program, "copy utility not installed");
                return Ok(None);
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        match child.wait_timeout(self.copy_timeout).map_err(InfraError::from)? {
            Some(status) => {
                debug!(%program, exit_code = status.code(), "copy utility exited");
                Ok(Some(status.success()))
            }
            None => {
                warn!(%program, timeout_ms = self.copy_timeout.as_millis(), "copy utility timed out");
                let _ = child.kill();
                let _ = child.wait();
                Ok(Some(false))
            }
        }
    }
}

impl Default for NativeClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardPlatform for NativeClipboard {
    fn supports_async_clipboard(&self) -> bool {
        self.system_clipboard && arboard::Clipboard::new().is_ok()
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| SlaDashError::Platform(format!("clipboard unavailable: {e}")))?;
            clipboard
                .set_text(text)
                .map_err(|e| SlaDashError::Platform(format!("clipboard write failed: {e}")))
        })
        .await
        .map_err(|e| SlaDashError::Internal(format!("clipboard task failed: {e}")))?
    }

    fn attach_offscreen_field(&self, text: &str) -> Result<FieldId> {
        let id = self.stage(text)?;
        debug!(field = %id, bytes = text.len(), "staged off-screen copy field");
        Ok(id)
    }

    fn select_field(&self, field: FieldId, mode: SelectionMode) -> Result<()> {
        let mut fields = self.fields.lock();
        let staged = fields
            .get_mut(&field)
            .ok_or_else(|| SlaDashError::NotFound(format!("{field} is not attached")))?;
        staged.selected = true;
        debug!(%field, ?mode, "selected staged field");
        Ok(())
    }

    fn exec_copy(&self, field: FieldId) -> Result<bool> {
        let selected = self.fields.lock().get(&field).is_some_and(|staged| staged.selected);
        if !selected {
            return Ok(false);
        }

        for command in &self.copy_commands {
            if let Some(copied) = self.run_copy_command(command, field)? {
                return Ok(copied);
            }
        }

        debug!("no copy utility available");
        Ok(false)
    }

    fn remove_field(&self, field: FieldId) {
        if self.fields.lock().remove(&field).is_some() {
            debug!(%field, "removed staged field");
        }
    }

    fn is_field_attached(&self, field: FieldId) -> bool {
        self.fields.lock().contains_key(&field)
    }

    fn show_manual_field(&self, text: &str, instruction: &str) -> Result<FieldId> {
        let id = self.stage(text)?;
        let path = self.staged_path(id).unwrap_or_default();
        let rule = "=".repeat(FRAME_WIDTH);

        let mut output = self.manual_output.lock();
        writeln!(output, "{rule}\n{instruction}\n{rule}\n{text}\n{rule}\n({})", path.display())
            .and_then(|()| output.flush())
            .map_err(InfraError::from)?;
        Ok(id)
    }
}

/// Whether text set through `arboard` survives this process exiting.
///
/// On X11 and Wayland the setting process must keep serving the selection,
/// which a one-shot CLI cannot do.
pub const fn os_clipboard_outlives_process() -> bool {
    cfg!(any(target_os = "macos", windows))
}

/// Copy utilities tried on this OS, most specific first.
pub fn default_copy_commands() -> Vec<Vec<String>> {
    let commands: &[&[&str]] = if cfg!(target_os = "macos") {
        &[&["pbcopy"]]
    } else if cfg!(windows) {
        &[&["clip"]]
    } else {
        &[&["wl-copy"], &["xclip", "-selection", "clipboard"], &["xsel", "--clipboard", "--input"]]
    };

    commands
        .iter()
        .map(|command| command.iter().map(|part| (*part).to_string()).collect())
        .collect()
}
