//! Logging initialisation
//!
//! Installs a `tracing-subscriber` formatter writing to stderr, leaving stdout
//! free for report text. `RUST_LOG` overrides the configured level.

use sladash_domain::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed (tests, embedding
/// applications), in which case the existing one is kept.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(true);
    let installed =
        if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.is_ok()
}
