//! Polybius square with the fixed 5×5 table (I and J share a cell).

const SQUARE: [[char; 5]; 5] = [
    ['A', 'B', 'C', 'D', 'E'],
    ['F', 'G', 'H', 'I', 'K'],
    ['L', 'M', 'N', 'O', 'P'],
    ['Q', 'R', 'S', 'T', 'U'],
    ['V', 'W', 'X', 'Y', 'Z'],
];

fn cell(row: char, col: char) -> Option<char> {
    let r = row.to_digit(10)?.checked_sub(1)? as usize;
    let c = col.to_digit(10)?.checked_sub(1)? as usize;
    SQUARE.get(r)?.get(c).copied()
}

/// Decode digit pairs (spaces ignored) into letters.
///
/// Pairs outside the table, pairs containing any other character (tabs and
/// newlines included), and an odd trailing digit are skipped.
pub fn decode(text: &str) -> String {
    let digits: Vec<char> = text.chars().filter(|&c| c != ' ').collect();
    digits
        .chunks_exact(2)
        .filter_map(|pair| cell(pair[0], pair[1]))
        .collect()
}

/// Encode ASCII letters as space-separated row/column pairs. `J` is written as
/// `I`; everything else is dropped.
pub fn encode(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
        .filter_map(|letter| {
            SQUARE.iter().enumerate().find_map(|(r, row)| {
                row.iter()
                    .position(|&l| l == letter)
                    .map(|c| format!("{}{}", r + 1, c + 1))
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pairs() {
        assert_eq!(decode("24 33 44 15 33 43 24 44 54"), "INTENSITY");
    }

    #[test]
    fn spaces_are_optional() {
        assert_eq!(decode("2315313134"), "HELLO");
        assert_eq!(decode("2 3 1 5"), "HE");
    }

    #[test]
    fn invalid_pairs_skipped() {
        assert_eq!(decode("11 06 90 12 3"), "AB");
        assert_eq!(decode("ab 11"), "A");
    }

    #[test]
    fn only_spaces_are_stripped() {
        assert_eq!(decode("1\t1"), "");
        assert_eq!(decode("11\n12"), "A");
    }

    #[test]
    fn encode_merges_j_into_i() {
        assert_eq!(encode("Jay!"), "24 11 54");
        assert_eq!(decode(&encode("Hello World")), "HELLOWORLD");
    }
}
