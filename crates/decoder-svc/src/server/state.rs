//! Shared application state injected into every Axum handler.

use std::time::Duration;

use crate::config::Config;

/// Application state shared across all request handlers.
///
/// The cipher registry is static, so state only carries request limits.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Longest accepted `text` field, in characters.
    pub max_text_len: usize,
    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Create a new [`AppState`] with the provided limits.
    pub fn new(max_text_len: usize, request_timeout: Duration) -> Self {
        Self {
            max_text_len,
            request_timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.max_text_len,
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] from default configuration, suitable for tests.
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
