//! Structured logging and optional OpenTelemetry span export.
//!
//! # Telemetry invariants
//!
//! - **No ciphertext or plaintext** may appear in any span attribute or log
//!   field; only cipher ids, lengths and error kinds are recorded.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`).

pub mod init;

pub use init::init_telemetry;
