//! Rail fence transposition.

use common::DecodeError;

/// Row occupied by each column of a zig-zag fence `len` columns wide.
fn zig_zag(len: usize, rails: usize) -> Vec<usize> {
    let mut rows = Vec::with_capacity(len);
    let mut row = 0;
    let mut descending = true;
    for _ in 0..len {
        rows.push(row);
        if row == 0 {
            descending = true;
        } else if row == rails - 1 {
            descending = false;
        }
        if descending {
            row += 1;
        } else {
            row -= 1;
        }
    }
    rows
}

/// Write `text` along the zig-zag and read the fence off row by row.
pub fn encode(text: &str, rails: usize) -> String {
    if rails < 2 {
        return text.to_owned();
    }
    let chars: Vec<char> = text.chars().collect();
    let rows = zig_zag(chars.len(), rails);
    (0..rails)
        .flat_map(|r| {
            rows.iter()
                .zip(&chars)
                .filter(move |(row, _)| **row == r)
                .map(|(_, c)| *c)
        })
        .collect()
}

/// Rebuild the fence from `text` and read it back in zig-zag order.
///
/// # Errors
///
/// Returns a `DecodingError` if a fence cell is left unfilled, which can only
/// happen if the zig-zag marking disagrees with the text length.
pub fn decode(text: &str, rails: usize) -> Result<String, DecodeError> {
    if rails < 2 {
        return Ok(text.to_owned());
    }
    let chars: Vec<char> = text.chars().collect();
    let rows = zig_zag(chars.len(), rails);

    let mut fence: Vec<Option<char>> = vec![None; chars.len()];
    let mut source = chars.iter().copied();
    for r in 0..rails {
        for (cell, _) in fence.iter_mut().zip(&rows).filter(|(_, row)| **row == r) {
            *cell = source.next();
        }
    }

    fence
        .into_iter()
        .collect::<Option<String>>()
        .ok_or_else(|| DecodeError::decoding("rail fence cell left unfilled"))
}
