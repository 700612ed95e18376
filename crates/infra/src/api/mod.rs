//! Remote SLA API adapters
//!
//! Implements the report source port on top of [`HttpClient`](crate::http::HttpClient).

pub mod sla_client;

pub use sla_client::{parse_below_target_body, HttpSlaReportSource};
