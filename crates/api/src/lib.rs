//! # SLA Dash App
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - The `sladash` command-line interface
//! - Application context (dependency injection)
//! - Command handlers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Commands};
pub use context::AppContext;
