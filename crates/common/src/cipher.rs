//! Cipher identifiers and the parameter values passed alongside a decode request.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::error::DecodeError;

/// Identifies one of the fixed set of supported ciphers and encodings.
///
/// The text form (used on the wire and by [`FromStr`]) is snake_case, e.g.
/// `"caesar_shift"` or `"hex_bytes"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherId {
    CaesarShift,
    Rot13,
    Vigenere,
    RailFence,
    PolybiusSquare,
    Atbash,
    ReverseText,
    Base64,
    HexBytes,
}

impl CipherId {
    /// Every cipher, in registry order.
    pub const ALL: [CipherId; 9] = [
        CipherId::CaesarShift,
        CipherId::Rot13,
        CipherId::Vigenere,
        CipherId::RailFence,
        CipherId::PolybiusSquare,
        CipherId::Atbash,
        CipherId::ReverseText,
        CipherId::Base64,
        CipherId::HexBytes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CipherId::CaesarShift => "caesar_shift",
            CipherId::Rot13 => "rot13",
            CipherId::Vigenere => "vigenere",
            CipherId::RailFence => "rail_fence",
            CipherId::PolybiusSquare => "polybius_square",
            CipherId::Atbash => "atbash",
            CipherId::ReverseText => "reverse_text",
            CipherId::Base64 => "base64",
            CipherId::HexBytes => "hex_bytes",
        }
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherId {
    type Err = DecodeError;

    /// # Errors
    ///
    /// Returns an `UnknownCipher` error if `s` names no registered cipher.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DecodeError::unknown_cipher(s))
    }
}

/// A single parameter value: an integer (shift, rails) or text (key, direction).
///
/// Serialised untagged, so JSON `3` is [`ParamValue::Int`] and JSON `"LEMON"` is
/// [`ParamValue::Text`]. Deserialisation saturates integers beyond the `i64`
/// range and accepts integral floats (`3.0`), leaving range clamping to the
/// parameter schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParamValueVisitor)
    }
}

struct ParamValueVisitor;

impl<'de> Visitor<'de> for ParamValueVisitor {
    type Value = ParamValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ParamValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ParamValue::Int(i64::try_from(v).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() && v.fract() == 0.0 {
            // `as` saturates at the i64 bounds.
            Ok(ParamValue::Int(v as i64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ParamValue::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ParamValue::Text(v))
    }
}

/// Parameter name → value. Names a cipher does not declare are ignored.
pub type Parameters = HashMap<String, ParamValue>;
