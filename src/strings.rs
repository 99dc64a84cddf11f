//! Small text helpers.

/// Uppercases the first character of `text`.
///
/// Characters whose uppercase form spans several code points (such as
/// `'ß'`) expand accordingly. Empty input stays empty.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reverses `text` character by character.
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(capitalize_first("Hello"), "Hello");
        assert_eq!(capitalize_first("1abc"), "1abc");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first("ßa"), "SSa");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_string("abc"), "cba");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("日本"), "本日");
    }
}
