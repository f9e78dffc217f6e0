//! Reverse the character order of a text.

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_characters() {
        assert_eq!(reverse("DLROW OLLEH"), "HELLO WORLD");
        assert_eq!(reverse("añb"), "bña");
    }
}
