//! Shared test helpers for `sladash-core` integration tests.
//!
//! These helpers provide in-memory port doubles and payload fixtures so the
//! tests can focus on behaviour instead of boilerplate.

#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod platform;

pub use fixtures::{category, entry, payload, StaticReportSource};
pub use platform::{LegacyBehaviour, ModernBehaviour, RecordingPlatform, RecordingSink};
