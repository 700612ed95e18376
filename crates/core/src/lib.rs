//! # SLA Dash Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Reporting date-range rules for every dashboard context
//! - The sites-below-target report composer
//! - The clipboard export state machine
//! - Port/adapter interfaces (traits) for the clock, the remote API, the
//!   clipboard platform and notifications
//!
//! ## Architecture Principles
//! - Only depends on `sladash-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - "Today" is always injected

pub mod clipboard;
pub mod date_range;
pub mod report;

// Infrastructure ports
pub mod clock_ports;

// Re-export specific items to avoid ambiguity
pub use clipboard::{ClipboardExporter, ClipboardPlatform, NotificationSink};
pub use clock_ports::{Clock, FixedClock};
pub use date_range::{range_for, MonthlySummaryPeriod};
pub use report::{
    compose_below_target_report, ReportOutcome, ReportService, SlaReportSource, SpSummary,
};
