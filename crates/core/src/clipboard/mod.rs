//! Clipboard export with graceful degradation.

pub mod exporter;
pub mod ports;

pub use exporter::ClipboardExporter;
pub use ports::{ClipboardPlatform, NotificationSink};
