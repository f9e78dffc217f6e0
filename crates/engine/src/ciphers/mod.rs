//! The individual cipher and encoding routines.
//!
//! Each routine is a small pure function over already-validated parameters.
//! Routines return `Result` only where the input itself can be malformed
//! (Base64, hex) or where an internal invariant could be broken (rail fence).

pub mod atbash;
pub mod caesar;
pub mod encoding;
pub mod polybius;
pub mod rail_fence;
pub mod reverse;
pub mod vigenere;
