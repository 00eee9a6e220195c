//! Shared utility functions.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Split text on whitespace and lower-case every word.
///
/// This is the tokenizer every word-based heuristic in the crate shares.
pub fn lowercase_words(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace().map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_millis_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn lowercase_words_splits_on_any_whitespace() {
        let words: Vec<_> = lowercase_words("Use  BCrypt\tfor\npasswords").collect();
        assert_eq!(words, vec!["use", "bcrypt", "for", "passwords"]);
    }

    #[test]
    fn lowercase_words_empty() {
        assert_eq!(lowercase_words("   ").count(), 0);
    }
}
