//! Axum middleware layers applied to the router.
//!
//! Includes request tracing, timeout enforcement, and response compression.

use std::time::Duration;

use tower_http::{
    compression::CompressionLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, HttpMakeClassifier, TraceLayer},
};
use tracing::Level;

/// Upper bound on JSON request bodies, independent of `MAX_TEXT_LEN`.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Request tracing at `INFO`. Spans record method and URI only; bodies are
/// never logged.
pub fn trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

pub fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(timeout)
}

pub fn compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}
