/// Splits `text` into lower-case words.
///
/// Any run of characters that are not ASCII letters (digits, punctuation,
/// whitespace, non-ASCII) acts as a single separator.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).collect()
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        assert_eq!(words("Cat, cat CAT!"), vec!["cat", "cat", "cat"]);
    }

    #[test]
    fn test_hyphen_splits_words() {
        assert_eq!(words("A-B"), vec!["a", "b"]);
        assert_eq!(words("a b"), vec!["a", "b"]);
        assert_eq!(words("AB"), vec!["ab"]);
    }

    #[test]
    fn test_digits_and_non_ascii_are_separators() {
        assert_eq!(words("abc123def"), vec!["abc", "def"]);
        assert_eq!(words("caf\u{e9} ol\u{e9}"), vec!["caf", "ol"]);
        assert_eq!(words("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_no_letters_yields_nothing() {
        assert!(words("").is_empty());
        assert!(words("   \t ").is_empty());
        assert!(words("1234 -- !!! 56").is_empty());
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let text = "The quick, brown FOX.";
        assert_eq!(words(text), words(text));
        assert_eq!(words(text), vec!["the", "quick", "brown", "fox"]);
    }
}
