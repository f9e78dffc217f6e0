//! Binary-to-text encodings: Base64 and hex.
//!
//! Both decode to raw bytes first and then require the bytes to be UTF-8.
//! Surrounding ASCII whitespace is ignored.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::DecodeError;

pub const INVALID_BASE64: &str = "Invalid Base64";
pub const INVALID_HEX: &str = "Invalid Hex";

/// Decode standard, padded Base64 into UTF-8 text.
///
/// # Errors
///
/// Returns an `InvalidEncoding` error on bad padding, characters outside the
/// Base64 alphabet, or decoded bytes that are not UTF-8.
pub fn decode_base64(text: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD
        .decode(text.trim_ascii())
        .map_err(|_| DecodeError::invalid_encoding(INVALID_BASE64))?;
    String::from_utf8(bytes).map_err(|_| DecodeError::invalid_encoding(INVALID_BASE64))
}

pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode an even-length hex string (either case) into UTF-8 text.
///
/// # Errors
///
/// Returns an `InvalidEncoding` error on odd length, non-hex characters, or
/// decoded bytes that are not UTF-8.
pub fn decode_hex(text: &str) -> Result<String, DecodeError> {
    let bytes =
        hex::decode(text.trim_ascii()).map_err(|_| DecodeError::invalid_encoding(INVALID_HEX))?;
    String::from_utf8(bytes).map_err(|_| DecodeError::invalid_encoding(INVALID_HEX))
}

pub fn encode_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DecodeErrorKind;

    #[test]
    fn base64_decodes_text() {
        assert_eq!(
            decode_base64("SGVsbG8gQ3liZXJTZWN1cml0eQ==").unwrap(),
            "Hello CyberSecurity"
        );
        assert_eq!(decode_base64("  SGk=\n").unwrap(), "Hi");
    }

    #[test]
    fn base64_rejects_malformed() {
        for bad in ["not base64!!", "SGk", "SGk=="] {
            let err = decode_base64(bad).unwrap_err();
            assert_eq!(err.kind(), DecodeErrorKind::InvalidEncoding, "{bad:?}");
            assert_eq!(err.message(), INVALID_BASE64);
        }
    }

    #[test]
    fn base64_rejects_non_utf8() {
        // 0xFF 0xFE
        let err = decode_base64("//4=").unwrap_err();
        assert_eq!(err.message(), INVALID_BASE64);
    }

    #[test]
    fn whitespace_only_decodes_to_empty() {
        assert_eq!(decode_base64(" \n").unwrap(), "");
        assert_eq!(decode_hex("\t").unwrap(), "");
    }

    #[test]
    fn hex_decodes_either_case() {
        assert_eq!(decode_hex("43797065722053616665").unwrap(), "Cyper Safe");
        assert_eq!(decode_hex("4f4B").unwrap(), "OK");
    }

    #[test]
    fn hex_rejects_malformed() {
        for bad in ["4F9", "zz", "ff", "c3"] {
            let err = decode_hex(bad).unwrap_err();
            assert_eq!(err.kind(), DecodeErrorKind::InvalidEncoding, "{bad:?}");
            assert_eq!(err.message(), INVALID_HEX);
        }
    }

    #[test]
    fn encoders_invert_decoders() {
        assert_eq!(decode_base64(&encode_base64("héllo")).unwrap(), "héllo");
        assert_eq!(encode_hex("OK"), "4f4b");
    }
}
