//! Request and response bodies exchanged over the decoder service's JSON API.

use serde::{Deserialize, Serialize};

use crate::cipher::{ParamValue, Parameters};

// ---------------------------------------------------------------------------
// Decode / encode endpoints
// ---------------------------------------------------------------------------

/// Request body for `POST /decode` and `POST /encode`.
///
/// `cipher` is kept as a raw string so an unrecognised name surfaces as an
/// `unknown_cipher` error rather than a JSON rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Cipher name, e.g. `"caesar_shift"`.
    pub cipher: String,
    /// Input text. May be empty.
    #[serde(default)]
    pub text: String,
    /// Cipher parameters; undeclared names are ignored.
    #[serde(default)]
    pub params: Parameters,
}

/// Successful response body for `POST /decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResponse {
    pub cipher: String,
    pub plaintext: String,
}

/// Successful response body for `POST /encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub cipher: String,
    pub ciphertext: String,
}

// ---------------------------------------------------------------------------
// Cipher listing
// ---------------------------------------------------------------------------

/// Response body for `GET /ciphers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherListResponse {
    /// Ciphers in registry order.
    pub ciphers: Vec<CipherInfo>,
}

/// Wire description of one registered cipher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherInfo {
    /// Machine name accepted in `TransformRequest::cipher`.
    pub id: String,
    /// Display name.
    pub name: String,
    pub params: Vec<ParamInfo>,
}

/// Wire description of one declared parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamInfo {
    /// Integer parameter; out-of-range values are clamped to `min..=max`.
    Int {
        name: String,
        min: i64,
        max: i64,
        default: i64,
    },
    /// Free-text parameter. `default` is absent when the parameter is required.
    Text {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    /// One of a fixed set of options.
    Choice {
        name: String,
        options: Vec<String>,
        default: String,
    },
}

impl ParamInfo {
    pub fn name(&self) -> &str {
        match self {
            ParamInfo::Int { name, .. }
            | ParamInfo::Text { name, .. }
            | ParamInfo::Choice { name, .. } => name,
        }
    }

    /// The value used when the caller omits this parameter.
    pub fn default_value(&self) -> Option<ParamValue> {
        match self {
            ParamInfo::Int { default, .. } => Some(ParamValue::Int(*default)),
            ParamInfo::Text { default, .. } => default.clone().map(ParamValue::Text),
            ParamInfo::Choice { default, .. } => Some(ParamValue::Text(default.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"invalid_encoding"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&crate::error::DecodeError> for ErrorResponse {
    fn from(e: &crate::error::DecodeError) -> Self {
        Self::new(e.kind().code(), e.message())
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status: `"ok"`.
    pub status: String,
    /// Number of registered ciphers.
    pub ciphers_loaded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn transform_request_defaults() {
        let req: TransformRequest = serde_json::from_str(r#"{"cipher": "atbash"}"#).unwrap();
        assert_eq!(req.cipher, "atbash");
        assert!(req.text.is_empty());
        assert!(req.params.is_empty());
    }

    #[test]
    fn error_response_from_decode_error() {
        let e = ErrorResponse::from(&DecodeError::invalid_encoding("Invalid Hex"));
        assert_eq!(e.code, "invalid_encoding");
        assert_eq!(e.message, "Invalid Hex");
    }

    #[test]
    fn param_info_tagged_by_kind() {
        let p = ParamInfo::Int {
            name: "rails".into(),
            min: 2,
            max: 10,
            default: 3,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["kind"], "int");
        assert_eq!(json["max"], 10);
        assert_eq!(p.default_value(), Some(ParamValue::Int(3)));
    }

    #[test]
    fn required_text_param_has_no_default() {
        let p = ParamInfo::Text {
            name: "key".into(),
            default: None,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("default").is_none());
        assert_eq!(p.default_value(), None);
        assert_eq!(p.name(), "key");
    }
}
