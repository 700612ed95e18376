//! Terminal-facing adapters for core ports.

pub mod terminal_notifier;

pub use terminal_notifier::TerminalNotificationSink;
