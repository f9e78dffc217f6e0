//! Vigenère cipher.
//!
//! Works on an ASCII-uppercased copy of both the text and the key, so the
//! output is always uppercase. The key position advances on every character,
//! letters or not; non-letters are copied through unshifted.

use common::DecodeError;

use super::caesar::shift_letter;

/// Subtract the repeating `key` from `text`.
///
/// # Errors
///
/// Returns an `InvalidParameter` error if `key` contains no letters.
pub fn decode(text: &str, key: &str) -> Result<String, DecodeError> {
    apply(text, key, -1)
}

/// Add the repeating `key` to `text`.
///
/// # Errors
///
/// Returns an `InvalidParameter` error if `key` contains no letters.
pub fn encode(text: &str, key: &str) -> Result<String, DecodeError> {
    apply(text, key, 1)
}

fn apply(text: &str, key: &str, sign: i64) -> Result<String, DecodeError> {
    let shifts: Vec<i64> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|k| i64::from(k.to_ascii_uppercase() as u8 - b'A'))
        .collect();
    if shifts.is_empty() {
        return Err(DecodeError::invalid_parameter("key must not be empty"));
    }

    Ok(text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let c = c.to_ascii_uppercase();
            shift_letter(c, sign * shifts[i % shifts.len()])
        })
        .collect())
}
