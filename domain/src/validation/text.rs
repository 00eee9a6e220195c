//! Text heuristics: completeness, coherence, relevance, consistency.
//!
//! These are deliberately cheap heuristics. Their thresholds and messages
//! are part of the observable output and must not be "improved" silently.

use super::check::{CheckOutcome, ContributionCheck};
use crate::contribution::entities::Contribution;
use crate::util::lowercase_words;
use std::collections::HashSet;

/// Subject used in issue messages by the single-modality validator
pub const CONTRIBUTION_SUBJECT: &str = "Contribution";

/// Subject used in issue messages for TEXT-modality contributions
pub const TEXT_SUBJECT: &str = "Text contribution";

/// Endings that signal a truncated thought
const TRUNCATION_MARKERS: [&str; 3] = ["...", ". .", ".."];

/// Fails when the trimmed text is shorter than `min_chars` characters
#[derive(Debug, Clone)]
pub struct CompletenessCheck {
    pub min_chars: usize,
    subject: &'static str,
}

impl CompletenessCheck {
    pub fn new(subject: &'static str) -> Self {
        Self {
            min_chars: 10,
            subject,
        }
    }
}

impl Default for CompletenessCheck {
    fn default() -> Self {
        Self::new(CONTRIBUTION_SUBJECT)
    }
}

impl ContributionCheck for CompletenessCheck {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn check(&self, contribution: &Contribution, _context: &str) -> CheckOutcome {
        if contribution.text_payload().trim().chars().count() < self.min_chars {
            CheckOutcome::fail(format!("{} is too brief to be meaningful", self.subject))
        } else {
            CheckOutcome::pass()
        }
    }
}

/// Fails when the trimmed text ends like a truncated sentence
#[derive(Debug, Clone)]
pub struct CoherenceCheck {
    subject: &'static str,
}

impl CoherenceCheck {
    pub fn new(subject: &'static str) -> Self {
        Self { subject }
    }
}

impl Default for CoherenceCheck {
    fn default() -> Self {
        Self::new(CONTRIBUTION_SUBJECT)
    }
}

impl ContributionCheck for CoherenceCheck {
    fn name(&self) -> &'static str {
        "coherence"
    }

    fn check(&self, contribution: &Contribution, _context: &str) -> CheckOutcome {
        let text = contribution.text_payload().trim();
        if TRUNCATION_MARKERS.iter().any(|m| text.ends_with(m)) {
            CheckOutcome::fail(format!("{} appears incomplete", self.subject))
        } else {
            CheckOutcome::pass()
        }
    }
}

/// Word-overlap relevance against the merge context.
///
/// Only evaluated when the context is longer than `min_context_chars`
/// characters; compares the sets of the first `window_words` lowercase words
/// of context and contribution and fails below `min_common` shared words.
#[derive(Debug, Clone)]
pub struct RelevanceCheck {
    pub min_context_chars: usize,
    pub window_words: usize,
    pub min_common: usize,
    subject: &'static str,
}

impl RelevanceCheck {
    pub fn new(subject: &'static str, min_context_chars: usize) -> Self {
        Self {
            min_context_chars,
            window_words: 20,
            min_common: 2,
            subject,
        }
    }

    fn leading_words(&self, s: &str) -> HashSet<String> {
        lowercase_words(s).take(self.window_words).collect()
    }
}

impl Default for RelevanceCheck {
    fn default() -> Self {
        Self::new(CONTRIBUTION_SUBJECT, 10)
    }
}

impl ContributionCheck for RelevanceCheck {
    fn name(&self) -> &'static str {
        "relevance"
    }

    fn check(&self, contribution: &Contribution, context: &str) -> CheckOutcome {
        if context.chars().count() <= self.min_context_chars {
            return CheckOutcome::pass();
        }

        let context_words = self.leading_words(context);
        let contribution_words = self.leading_words(contribution.text_payload());
        let common = context_words.intersection(&contribution_words).count();

        if common < self.min_common {
            CheckOutcome::fail(format!("{} appears unrelated to context", self.subject))
        } else {
            CheckOutcome::pass()
        }
    }
}

/// Flags "yes" and "no" appearing within `window_chars` characters of each
/// other (first occurrence of each, substring match).
#[derive(Debug, Clone)]
pub struct ConsistencyCheck {
    pub window_chars: usize,
}

impl Default for ConsistencyCheck {
    fn default() -> Self {
        Self { window_chars: 100 }
    }
}

impl ContributionCheck for ConsistencyCheck {
    fn name(&self) -> &'static str {
        "consistency"
    }

    fn check(&self, contribution: &Contribution, _context: &str) -> CheckOutcome {
        let text = contribution.text_payload().to_lowercase();
        let char_pos = |needle: &str| text.find(needle).map(|i| text[..i].chars().count());

        match (char_pos("yes"), char_pos("no")) {
            (Some(yes), Some(no)) if yes.abs_diff(no) < self.window_chars => {
                CheckOutcome::fail("Potential contradiction detected")
            }
            _ => CheckOutcome::pass(),
        }
    }
}

/// Runs the wrapped check only when the contribution carries non-empty text
#[derive(Debug, Clone)]
pub struct TextPayloadOnly<C>(pub C);

impl<C: ContributionCheck> ContributionCheck for TextPayloadOnly<C> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn check(&self, contribution: &Contribution, context: &str) -> CheckOutcome {
        if contribution.content().has_text() {
            self.0.check(contribution, context)
        } else {
            CheckOutcome::pass()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Contribution {
        Contribution::text("agent-1", s, 0.9)
    }

    #[test]
    fn test_completeness_threshold() {
        let check = CompletenessCheck::default();
        assert!(!check.check(&text("Hi"), "").is_ok());
        assert!(!check.check(&text("   123456789   "), "").is_ok());
        assert!(check.check(&text("1234567890"), "").is_ok());
        assert_eq!(
            check.check(&text("Hi"), "").issues(),
            ["Contribution is too brief to be meaningful"]
        );
    }

    #[test]
    fn test_completeness_counts_characters_not_bytes() {
        let check = CompletenessCheck::default();
        // 9 characters, 27 bytes
        assert!(!check.check(&text("あいうえおかきくけ"), "").is_ok());
    }

    #[test]
    fn test_coherence_detects_truncation() {
        let check = CoherenceCheck::default();
        assert!(!check.check(&text("We should consider..."), "").is_ok());
        assert!(!check.check(&text("We should consider. ."), "").is_ok());
        assert!(!check.check(&text("We should consider..  "), "").is_ok());
        assert!(check.check(&text("We should consider it."), "").is_ok());
    }

    #[test]
    fn test_relevance_skipped_for_short_context() {
        let check = RelevanceCheck::default();
        assert!(check.check(&text("completely different words"), "").is_ok());
        assert!(check.check(&text("completely different words"), "0123456789").is_ok());
    }

    #[test]
    fn test_relevance_requires_two_common_words() {
        let check = RelevanceCheck::default();
        let context = "Implementing user authentication system";

        assert!(check.check(&text("The user authentication flow needs rate limits"), context).is_ok());
        assert_eq!(
            check.check(&text("Authentication should be simple"), context).issues(),
            ["Contribution appears unrelated to context"]
        );
    }

    #[test]
    fn test_relevance_only_looks_at_first_twenty_words() {
        let check = RelevanceCheck::default();
        let context = "implementing user authentication system";
        let filler = "word ".repeat(20);
        let late = text(&format!("{filler}user authentication"));
        assert!(!check.check(&late, context).is_ok());
    }

    #[test]
    fn test_consistency_yes_no_window() {
        let check = ConsistencyCheck::default();
        assert!(!check.check(&text("Yes we could, but no, we should not"), "").is_ok());

        let far = format!("yes {} no", "a".repeat(120));
        assert!(check.check(&text(&far), "").is_ok());
        assert!(check.check(&text("Only affirmative: yes indeed"), "").is_ok());
    }

    #[test]
    fn test_consistency_matches_substrings() {
        // "no" inside "know", "yes" inside "yesterday": a known weakness kept as-is
        let check = ConsistencyCheck::default();
        assert!(!check.check(&text("Yesterday we did not know"), "").is_ok());
    }

    #[test]
    fn test_text_payload_only_skips_media() {
        use crate::contribution::{Content, Modality};

        let check = TextPayloadOnly(CompletenessCheck::new(TEXT_SUBJECT));
        let media = Contribution::new("a", Content::image("x.png"), Modality::Text, 0.5);
        assert!(check.check(&media, "").is_ok());
        assert_eq!(
            check.check(&text("short"), "").issues(),
            ["Text contribution is too brief to be meaningful"]
        );
    }
}
