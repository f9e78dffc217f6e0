//! Decode dispatcher: validate a request against the registry and run the
//! matching cipher routine.
//!
//! All failures come back as [`DecodeError`] values; nothing here panics on
//! caller input.

use common::{CipherId, DecodeError, DecodeResult, Parameters};
use tracing::debug;

use crate::ciphers::caesar::Direction;
use crate::ciphers::{atbash, caesar, encoding, polybius, rail_fence, reverse, vigenere};
use crate::params::{resolve, ResolvedParams};
use crate::registry::{self, lookup, BACKWARD, DIRECTION, FORWARD, KEY, RAILS, SHIFT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Decode,
    Encode,
}

/// Decode `ciphertext` with `cipher`.
///
/// Empty input yields empty output without validating `params`.
///
/// # Errors
///
/// `InvalidParameter` when a parameter cannot be made valid, `InvalidEncoding`
/// for malformed Base64/hex, `DecodingError` for anything else.
pub fn decode(cipher: CipherId, ciphertext: &str, params: &Parameters) -> DecodeResult {
    run(Mode::Decode, cipher, ciphertext, params)
}

/// Like [`decode`], selecting the cipher by wire name.
///
/// # Errors
///
/// Additionally returns `UnknownCipher` if `name` is not registered.
pub fn decode_named(name: &str, ciphertext: &str, params: &Parameters) -> DecodeResult {
    let spec = registry::lookup_name(name)?;
    decode(spec.id, ciphertext, params)
}

/// Encode `plaintext` with `cipher`; the inverse of [`decode`].
///
/// # Errors
///
/// Same as [`decode`].
pub fn encode(cipher: CipherId, plaintext: &str, params: &Parameters) -> DecodeResult {
    run(Mode::Encode, cipher, plaintext, params)
}

/// Like [`encode`], selecting the cipher by wire name.
///
/// # Errors
///
/// Additionally returns `UnknownCipher` if `name` is not registered.
pub fn encode_named(name: &str, plaintext: &str, params: &Parameters) -> DecodeResult {
    let spec = registry::lookup_name(name)?;
    encode(spec.id, plaintext, params)
}

fn run(mode: Mode, cipher: CipherId, text: &str, params: &Parameters) -> DecodeResult {
    if text.is_empty() {
        return Ok(String::new());
    }
    let spec = lookup(cipher);
    let args = resolve(spec, params)?;
    debug!(cipher = %cipher, ?mode, chars = text.chars().count(), "dispatching");

    let result = apply(mode, cipher, text, &args);
    if let Err(e) = &result {
        debug!(cipher = %cipher, ?mode, kind = %e.kind(), "cipher routine failed");
    }
    result
}

fn apply(mode: Mode, cipher: CipherId, text: &str, args: &ResolvedParams) -> DecodeResult {
    match (cipher, mode) {
        (CipherId::CaesarShift, _) => {
            let shift = args.int(SHIFT)?;
            let direction = parse_direction(args.text(DIRECTION)?)?;
            let direction = match mode {
                Mode::Decode => direction,
                Mode::Encode => direction.reversed(),
            };
            Ok(caesar::shift(text, shift, direction))
        }
        (CipherId::Rot13, _) => Ok(caesar::rot13(text)),
        (CipherId::Vigenere, Mode::Decode) => vigenere::decode(text, args.text(KEY)?),
        (CipherId::Vigenere, Mode::Encode) => vigenere::encode(text, args.text(KEY)?),
        (CipherId::RailFence, Mode::Decode) => rail_fence::decode(text, rails(args)?),
        (CipherId::RailFence, Mode::Encode) => Ok(rail_fence::encode(text, rails(args)?)),
        (CipherId::PolybiusSquare, Mode::Decode) => Ok(polybius::decode(text)),
        (CipherId::PolybiusSquare, Mode::Encode) => Ok(polybius::encode(text)),
        (CipherId::Atbash, _) => Ok(atbash::mirror(text)),
        (CipherId::ReverseText, _) => Ok(reverse::reverse(text)),
        (CipherId::Base64, Mode::Decode) => encoding::decode_base64(text),
        (CipherId::Base64, Mode::Encode) => Ok(encoding::encode_base64(text)),
        (CipherId::HexBytes, Mode::Decode) => encoding::decode_hex(text),
        (CipherId::HexBytes, Mode::Encode) => Ok(encoding::encode_hex(text)),
    }
}

fn parse_direction(s: &str) -> Result<Direction, DecodeError> {
    match s {
        FORWARD => Ok(Direction::Forward),
        BACKWARD => Ok(Direction::Backward),
        other => Err(DecodeError::invalid_parameter(format!(
            "{DIRECTION} must be {FORWARD} or {BACKWARD}, got {other}"
        ))),
    }
}

fn rails(args: &ResolvedParams) -> Result<usize, DecodeError> {
    let rails = args.int(RAILS)?;
    usize::try_from(rails)
        .map_err(|_| DecodeError::decoding(format!("{RAILS} out of range: {rails}")))
}
