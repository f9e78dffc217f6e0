//! Caesar shift and ROT13.

/// Which way letters move through the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Shift ASCII letter `c` by `delta` positions within its own case.
/// Any other character is returned unchanged.
pub(crate) fn shift_letter(c: char, delta: i64) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    let offset = i64::from(c as u8 - base);
    // rem_euclid keeps the result in 0..26 for negative deltas.
    char::from(base + (offset + delta).rem_euclid(26) as u8)
}

/// Shift every letter of `text` by `shift` positions in `direction`.
pub fn shift(text: &str, shift: i64, direction: Direction) -> String {
    let delta = match direction {
        Direction::Forward => shift,
        Direction::Backward => -shift,
    };
    text.chars().map(|c| shift_letter(c, delta)).collect()
}

/// ROT13; its own inverse.
pub fn rot13(text: &str) -> String {
    shift(text, 13, Direction::Forward)
}
