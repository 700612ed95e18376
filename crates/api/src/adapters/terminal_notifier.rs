//! Notification sink that writes one line per notification to stderr.

use std::io::Write;

use parking_lot::Mutex;
use sladash_core::NotificationSink;
use sladash_domain::{Notification, NotificationLevel};

/// Writes `[OK] title: description` style lines.
pub struct TerminalNotificationSink {
    output: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotificationSink {
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    pub fn new(output: Box<dyn Write + Send>) -> Self {
        Self { output: Mutex::new(output) }
    }
}

impl NotificationSink for TerminalNotificationSink {
    fn notify(&self, notification: Notification) {
        let tag = match notification.level {
            NotificationLevel::Success => "OK",
            NotificationLevel::Info => "INFO",
            NotificationLevel::Error => "!!",
        };

        let mut output = self.output.lock();
        if let Err(err) =
            writeln!(output, "[{tag}] {}: {}", notification.title, notification.description)
        {
            tracing::debug!(error = %err, "failed to write notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_tagged_line() {
        let buffer = Buffer::default();
        let sink = TerminalNotificationSink::new(Box::new(buffer.clone()));

        sink.notify(Notification::error("Salin manual", "Clipboard tidak dapat diakses."));

        let written = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(written, "[!!] Salin manual: Clipboard tidak dapat diakses.\n");
    }
}
