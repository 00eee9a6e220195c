//! String utilities for the domain layer.

/// Truncate a string to a maximum number of characters, appending `...` when
/// anything was cut.
///
/// Used for log previews; the limit counts characters, not bytes, so
/// multi-byte text is never split mid-character.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

/// Return the first `n` characters of `s` as a sub-slice.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Upper-case the first character and lower-case the rest (`"image"` -> `"Image"`).
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ascii() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn test_preview_exact_length_is_untouched() {
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("あのね、こんにちは", 3), "あのね...");
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("abcdef", 3), "abc");
        assert_eq!(char_prefix("ab", 3), "ab");
        assert_eq!(char_prefix("", 3), "");
        assert_eq!(char_prefix("日本語テスト", 2), "日本");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("image"), "Image");
        assert_eq!(title_case("MULTIMODAL"), "Multimodal");
        assert_eq!(title_case(""), "");
    }
}
