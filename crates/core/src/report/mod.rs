//! SLA-below-target report: composition, data source port and service.

pub mod composer;
pub mod ports;
pub mod service;

pub use composer::{
    compose_below_target_report, format_site_line, report_month_label, sp_summary, SpSummary,
};
pub use ports::SlaReportSource;
pub use service::{ReportOutcome, ReportService};
