//! Property-based tests for the decode dispatcher.
//!
//! These tests use proptest to verify invariants hold for arbitrary inputs:
//! - Caesar directions are exact inverses
//! - Self-inverse ciphers are involutions
//! - Rail fence and Vigenère round-trip through encode
//! - Base64/hex never panic on arbitrary input

use engine::{decode, encode, CipherId, DecodeErrorKind, ParamValue, Parameters};
use proptest::prelude::*;

fn params(pairs: &[(&str, ParamValue)]) -> Parameters {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

fn caesar(shift: i64, direction: &str) -> Parameters {
    params(&[
        ("shift", ParamValue::Int(shift)),
        ("direction", ParamValue::Text(direction.to_owned())),
    ])
}

// Printable text with a mix of letters, digits, punctuation and non-ASCII.
fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?éßж]{0,64}"
}

#[test]
fn prop_caesar_directions_are_inverses() {
    proptest!(|(text in text_strategy(), shift in 1i64..=25)| {
        let back = decode(CipherId::CaesarShift, &text, &caesar(shift, "-")).unwrap();
        let forth = decode(CipherId::CaesarShift, &back, &caesar(shift, "+")).unwrap();
        prop_assert_eq!(forth, text);
    });
}

#[test]
fn prop_self_inverse_ciphers() {
    let none = Parameters::new();
    proptest!(|(text in text_strategy())| {
        for id in [CipherId::Rot13, CipherId::Atbash, CipherId::ReverseText] {
            let once = decode(id, &text, &none).unwrap();
            let twice = decode(id, &once, &none).unwrap();
            prop_assert_eq!(&twice, &text);
        }
    });
}

#[test]
fn prop_rail_fence_round_trip() {
    proptest!(|(text in text_strategy(), rails in 2i64..=10)| {
        let p = params(&[("rails", ParamValue::Int(rails))]);
        let cipher = encode(CipherId::RailFence, &text, &p).unwrap();
        prop_assert_eq!(cipher.chars().count(), text.chars().count());
        prop_assert_eq!(decode(CipherId::RailFence, &cipher, &p).unwrap(), text);
    });
}

#[test]
fn prop_vigenere_is_periodic_in_key() {
    proptest!(|(text in "[A-Z ]{1,48}", key in "[A-Z]{1,6}", repeats in 2usize..4)| {
        let short = params(&[("key", ParamValue::Text(key.clone()))]);
        let long = params(&[("key", ParamValue::Text(key.repeat(repeats)))]);
        prop_assert_eq!(
            decode(CipherId::Vigenere, &text, &short).unwrap(),
            decode(CipherId::Vigenere, &text, &long).unwrap()
        );
    });
}

#[test]
fn prop_vigenere_round_trip_uppercases() {
    proptest!(|(text in text_strategy(), key in "[a-zA-Z]{1,8}")| {
        let p = params(&[("key", ParamValue::Text(key))]);
        let cipher = encode(CipherId::Vigenere, &text, &p).unwrap();
        let plain = decode(CipherId::Vigenere, &cipher, &p).unwrap();
        prop_assert_eq!(plain, text.to_ascii_uppercase());
    });
}

#[test]
fn prop_one_output_char_per_input_char() {
    proptest!(|(text in text_strategy())| {
        let p = params(&[("key", ParamValue::Text("KEY".into()))]);
        for id in [CipherId::CaesarShift, CipherId::Rot13, CipherId::Vigenere, CipherId::Atbash] {
            let out = decode(id, &text, &p).unwrap();
            prop_assert_eq!(out.chars().count(), text.chars().count());
        }
    });
}

#[test]
fn prop_encodings_never_panic() {
    let none = Parameters::new();
    proptest!(|(text in "\\PC{0,64}")| {
        for id in [CipherId::Base64, CipherId::HexBytes, CipherId::PolybiusSquare] {
            match decode(id, &text, &none) {
                Ok(_) => {}
                Err(e) => prop_assert_eq!(e.kind(), DecodeErrorKind::InvalidEncoding),
            }
        }
    });
}

#[test]
fn prop_encodings_round_trip() {
    let none = Parameters::new();
    proptest!(|(text in "\\PC{0,64}")| {
        for id in [CipherId::Base64, CipherId::HexBytes] {
            let encoded = encode(id, &text, &none).unwrap();
            prop_assert_eq!(decode(id, &encoded, &none).unwrap(), text.clone());
        }
    });
}
