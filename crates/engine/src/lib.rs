//! Multi-scheme classical cipher decode engine.
//!
//! Given a [`CipherId`], an input text and a [`Parameters`] map, the engine
//! deterministically produces plaintext or a typed [`DecodeError`]. Every call
//! is a pure function of its inputs; the registry is static data, so the engine
//! can be called from any number of threads without locking.
//!
//! ```
//! use engine::{decode, CipherId, ParamValue, Parameters};
//!
//! let params = Parameters::from([("shift".to_owned(), ParamValue::Int(3))]);
//! assert_eq!(decode(CipherId::CaesarShift, "KHOOR ZRUOG", &params).unwrap(), "HELLO WORLD");
//! ```

pub mod ciphers;
pub mod dispatch;
pub mod params;
pub mod registry;

pub use common::{CipherId, DecodeError, DecodeErrorKind, DecodeResult, ParamValue, Parameters};
pub use dispatch::{decode, decode_named, encode, encode_named};
pub use registry::{list_ciphers, lookup, lookup_name, CipherSpec, ParamKind, ParamSpec};
