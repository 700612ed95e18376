//! # SLA Dash Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON/TOML files)
//! - Logging initialisation
//! - HTTP client and the SLA API adapter
//! - System clock in the reporting timezone
//! - Native clipboard platform and notification sinks
//!
//! ## Architecture
//! - Implements traits defined in `sladash-core`
//! - Contains all "impure" code (I/O, network, OS clipboard)

pub mod api;
pub mod clock;
pub mod config;
pub mod errors;
pub mod http;
pub mod notify;
pub mod observability;
pub mod platform;

// Re-export commonly used items
pub use api::HttpSlaReportSource;
pub use clock::SystemClock;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use notify::TracingNotificationSink;
pub use platform::NativeClipboard;
