//! Atbash: mirror each letter around the middle of the alphabet.

/// Apply Atbash to `text`. Self-inverse.
pub fn mirror(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                // 155 = b'A' + b'Z'
                char::from(155 - c as u8)
            } else if c.is_ascii_lowercase() {
                // 219 = b'a' + b'z'
                char::from(219 - c as u8)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_letters() {
        assert_eq!(mirror("SVOOL DLIOW"), "HELLO WORLD");
        assert_eq!(mirror("SVOOL GVZN"), "HELLO TEAM");
    }

    #[test]
    fn preserves_case_and_others() {
        assert_eq!(mirror("Az-zA 9"), "Za-aZ 9");
    }

    #[test]
    fn is_involution() {
        let text = "The quick brown fox, 1999!";
        assert_eq!(mirror(&mirror(text)), text);
    }
}
