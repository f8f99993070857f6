//! Logging setup.
//!
//! The Dioxus logger installs a `tracing` subscriber that writes to the
//! browser console on web and to stderr on desktop. Everything else in the
//! crate logs through the `tracing` macros.

use crate::config::PlayerConfig;

/// Installs the global subscriber at the configured level.
///
/// Only the first call wins; a second subscriber would be rejected by
/// `tracing`, so failures are reported and otherwise ignored.
pub fn init_logging(config: &PlayerConfig) {
    let level = config.tracing_level();
    if let Err(_err) = dioxus::logger::init(level) {
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("Failed to initialize logging: {}", _err);
        return;
    }
    tracing::debug!(%level, catalog = %config.catalog_url, "logging initialized");
}
