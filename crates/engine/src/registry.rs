//! Static registry of supported ciphers and the parameters each one accepts.
//!
//! The registry is built at compile time and never mutated, so lookups are
//! plain reads of `'static` data and safe from any thread.

use common::{
    protocol::{CipherInfo, ParamInfo},
    CipherId, DecodeError,
};

/// Type and validity range of one declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Integer parameter. Out-of-range values are clamped to `min..=max`.
    Int { min: i64, max: i64, default: i64 },
    /// Non-empty string of ASCII letters. `default: None` makes it required.
    Alphabetic { default: Option<&'static str> },
    /// One of a fixed set of string options.
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

/// A declared parameter: its name and [`ParamKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// Static description of a single cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSpec {
    pub id: CipherId,
    /// Human-readable name for presenting choices.
    pub name: &'static str,
    /// Declared parameters, in presentation order.
    pub params: &'static [ParamSpec],
}

impl CipherSpec {
    /// Find the declaration of parameter `name`, if this cipher accepts it.
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Wire representation for the `/ciphers` listing.
    pub fn to_info(&self) -> CipherInfo {
        CipherInfo {
            id: self.id.as_str().to_owned(),
            name: self.name.to_owned(),
            params: self.params.iter().map(ParamSpec::to_info).collect(),
        }
    }
}

impl ParamSpec {
    fn to_info(&self) -> ParamInfo {
        let name = self.name.to_owned();
        match self.kind {
            ParamKind::Int { min, max, default } => ParamInfo::Int {
                name,
                min,
                max,
                default,
            },
            ParamKind::Alphabetic { default } => ParamInfo::Text {
                name,
                default: default.map(str::to_owned),
            },
            ParamKind::Choice { options, default } => ParamInfo::Choice {
                name,
                options: options.iter().map(|o| (*o).to_owned()).collect(),
                default: default.to_owned(),
            },
        }
    }
}

pub const SHIFT: &str = "shift";
pub const DIRECTION: &str = "direction";
pub const KEY: &str = "key";
pub const RAILS: &str = "rails";

/// Caesar direction option that shifts letters forward.
pub const FORWARD: &str = "+";
/// Caesar direction option that shifts letters back.
pub const BACKWARD: &str = "-";

const CAESAR_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: SHIFT,
        kind: ParamKind::Int {
            min: 1,
            max: 25,
            default: 3,
        },
    },
    ParamSpec {
        name: DIRECTION,
        kind: ParamKind::Choice {
            options: &[BACKWARD, FORWARD],
            default: BACKWARD,
        },
    },
];

const VIGENERE_PARAMS: &[ParamSpec] = &[ParamSpec {
    name: KEY,
    kind: ParamKind::Alphabetic { default: None },
}];

const RAIL_FENCE_PARAMS: &[ParamSpec] = &[ParamSpec {
    name: RAILS,
    kind: ParamKind::Int {
        min: 2,
        max: 10,
        default: 3,
    },
}];

// Entries are indexed by `CipherId as usize`; keep them in enum order.
static REGISTRY: [CipherSpec; 9] = [
    CipherSpec {
        id: CipherId::CaesarShift,
        name: "Caesar Shift",
        params: CAESAR_PARAMS,
    },
    CipherSpec {
        id: CipherId::Rot13,
        name: "ROT13",
        params: &[],
    },
    CipherSpec {
        id: CipherId::Vigenere,
        name: "Vigenère",
        params: VIGENERE_PARAMS,
    },
    CipherSpec {
        id: CipherId::RailFence,
        name: "Rail Fence",
        params: RAIL_FENCE_PARAMS,
    },
    CipherSpec {
        id: CipherId::PolybiusSquare,
        name: "Polybius Square",
        params: &[],
    },
    CipherSpec {
        id: CipherId::Atbash,
        name: "Atbash",
        params: &[],
    },
    CipherSpec {
        id: CipherId::ReverseText,
        name: "Reverse Text",
        params: &[],
    },
    CipherSpec {
        id: CipherId::Base64,
        name: "Base64",
        params: &[],
    },
    CipherSpec {
        id: CipherId::HexBytes,
        name: "Hex Bytes",
        params: &[],
    },
];

/// All registered ciphers in stable registry order.
pub fn list_ciphers() -> &'static [CipherSpec] {
    &REGISTRY
}

/// The static description of `id`.
pub fn lookup(id: CipherId) -> &'static CipherSpec {
    &REGISTRY[id as usize]
}

/// Resolve a cipher by its wire name (e.g. `"rail_fence"`).
///
/// # Errors
///
/// Returns an `UnknownCipher` error if `name` is not a registered cipher.
pub fn lookup_name(name: &str) -> Result<&'static CipherSpec, DecodeError> {
    let id: CipherId = name.parse()?;
    Ok(lookup(id))
}
