//! # SLA Dash Domain
//!
//! Business domain types and models for the SLA dashboard.
//!
//! This crate contains:
//! - Reporting types (`DateRange`, `ReportingContext`, the below-target
//!   payload)
//! - Clipboard export outcomes and notifications
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the Indonesian month table
//!
//! ## Architecture
//! - No dependencies on other SLA Dash crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::month_names::{indonesian_month_name, month_year_label};
