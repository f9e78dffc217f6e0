//! Common types, protocol definitions, and errors shared across `cipher-room` crates.

pub mod cipher;
pub mod error;
pub mod protocol;

pub use cipher::{CipherId, ParamValue, Parameters};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
