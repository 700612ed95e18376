//! Command handlers - CLI to core bridge
//!
//! Each handler returns the text to print on stdout; logging and
//! notifications go to stderr.

mod range;
mod report;

pub use range::{period_command, range_command};
pub use report::{linger_for_manual_copy, read_payload_file, report_command};
