//! The decode error taxonomy shared by the engine and the service.

use std::fmt;

use thiserror::Error;

/// Result of a single decode or encode call.
pub type DecodeResult = Result<String, DecodeError>;

/// Classification of a [`DecodeError`].
///
/// Kinds map to HTTP status codes returned by the service:
/// - [`DecodeErrorKind::UnknownCipher`] → 404
/// - [`DecodeErrorKind::InvalidParameter`] → 422
/// - [`DecodeErrorKind::InvalidEncoding`] → 422
/// - [`DecodeErrorKind::DecodingError`] → 500
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// The cipher name is not one of the registered ciphers.
    UnknownCipher,
    /// A parameter failed static validation (e.g. an empty Vigenère key).
    InvalidParameter,
    /// A Base64 or hex payload is malformed or does not decode to UTF-8 text.
    InvalidEncoding,
    /// Any other unexpected failure inside a cipher routine.
    DecodingError,
}

impl DecodeErrorKind {
    /// Short machine-readable code used in JSON error bodies.
    pub fn code(self) -> &'static str {
        match self {
            DecodeErrorKind::UnknownCipher => "unknown_cipher",
            DecodeErrorKind::InvalidParameter => "invalid_parameter",
            DecodeErrorKind::InvalidEncoding => "invalid_encoding",
            DecodeErrorKind::DecodingError => "decoding_error",
        }
    }

    /// Returns the HTTP status code that should be sent for this kind.
    pub fn http_status(self) -> u16 {
        match self {
            DecodeErrorKind::UnknownCipher => 404,
            DecodeErrorKind::InvalidParameter => 422,
            DecodeErrorKind::InvalidEncoding => 422,
            DecodeErrorKind::DecodingError => 500,
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A typed decoding failure carrying a kind and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    message: String,
}

impl DecodeError {
    /// Construct a [`DecodeError`] from a kind and message.
    pub fn new(kind: DecodeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown_cipher(name: &str) -> Self {
        Self::new(DecodeErrorKind::UnknownCipher, format!("unknown cipher: {name}"))
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidParameter, message)
    }

    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidEncoding, message)
    }

    pub fn decoding(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::DecodingError, message)
    }

    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Message safe to show to an end user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(DecodeErrorKind::UnknownCipher.http_status(), 404);
        assert_eq!(DecodeErrorKind::InvalidParameter.http_status(), 422);
        assert_eq!(DecodeErrorKind::InvalidEncoding.http_status(), 422);
        assert_eq!(DecodeErrorKind::DecodingError.http_status(), 500);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let e = DecodeError::invalid_encoding("Invalid Base64");
        assert_eq!(e.to_string(), "invalid_encoding: Invalid Base64");
        assert_eq!(e.message(), "Invalid Base64");
        assert_eq!(e.kind(), DecodeErrorKind::InvalidEncoding);
    }

    #[test]
    fn unknown_cipher_names_the_input() {
        let e = DecodeError::unknown_cipher("enigma");
        assert_eq!(e.kind(), DecodeErrorKind::UnknownCipher);
        assert!(e.message().contains("enigma"));
    }
}
