//! Axum router construction.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState) -> Router {
    let timeout = state.request_timeout;
    Router::new()
        .route("/decode", post(handlers::decode))
        .route("/encode", post(handlers::encode))
        .route("/ciphers", get(handlers::ciphers))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(middleware::MAX_BODY_BYTES))
        .layer(middleware::trace_layer())
        .layer(middleware::timeout_layer(timeout))
        .layer(middleware::compression_layer())
        .with_state(state)
}
