//! Text merge algorithms
//!
//! Each function receives contributions that already passed validation and
//! returns the merged text together with an unclamped confidence; the engine
//! clamps the final score.

use super::tally::WordTally;
use crate::contribution::entities::Contribution;
use std::collections::BTreeSet;

/// Number of contributions kept per agent by [`synthesize`]
pub const PARTS_PER_AGENT: usize = 2;

/// Agent count at which the diversity bonus saturates
pub const AGENT_DIVERSITY_CAP: f64 = 5.0;

/// Share of contributions a word must appear in to count as consensus
pub const CONSENSUS_THRESHOLD: f64 = 0.6;

/// Maximum number of consensus words listed
pub const CONSENSUS_WORD_LIMIT: usize = 10;

/// Contributions shorter than this (in characters) are brief insights
pub const BRIEF_INSIGHT_CHARS: usize = 100;

/// Aspect bucket count at which the diversity bonus saturates
pub const ASPECT_DIVERSITY_CAP: f64 = 4.0;

/// Merged text and its aggregate confidence
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub content: String,
    pub confidence: f64,
}

impl Merged {
    pub fn new(content: impl Into<String>, confidence: f64) -> Self {
        Self {
            content: content.into(),
            confidence,
        }
    }
}

/// Mean confidence, 0.0 for an empty slice
pub fn average_confidence(contributions: &[&Contribution]) -> f64 {
    if contributions.is_empty() {
        return 0.0;
    }
    contributions.iter().map(|c| c.confidence()).sum::<f64>() / contributions.len() as f64
}

/// Distinct agent ids
pub fn distinct_agents<'a>(contributions: &[&'a Contribution]) -> BTreeSet<&'a str> {
    contributions.iter().map(|c| c.agent_id()).collect()
}

/// `avg * (1 + min(groups / cap, 1))`
pub(crate) fn diversity_boost(avg: f64, groups: usize, cap: f64) -> f64 {
    avg * (1.0 + (groups as f64 / cap).min(1.0))
}

/// Group items by key, keeping keys in first-seen order
pub(crate) fn group_ordered<K: PartialEq, T>(
    items: impl IntoIterator<Item = (K, T)>,
) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for (key, item) in items {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// One `[agent Perspective]: ` block per agent, from its first two contributions
pub fn synthesize(contributions: &[&Contribution]) -> Merged {
    let by_agent = group_ordered(contributions.iter().map(|c| (c.agent_id(), c.text_payload())));

    let content = by_agent
        .iter()
        .map(|(agent, texts)| {
            let parts: Vec<&str> = texts.iter().take(PARTS_PER_AGENT).copied().collect();
            format!("[{agent} Perspective]: {}", parts.join("; "))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let confidence = diversity_boost(
        average_confidence(contributions),
        by_agent.len(),
        AGENT_DIVERSITY_CAP,
    )
    .min(1.0);

    Merged::new(content, confidence)
}

/// Words appearing at least `0.6 × contribution_count` times
pub fn find_consensus(contributions: &[&Contribution]) -> Merged {
    let tally = WordTally::from_texts(contributions.iter().map(|c| c.text_payload()));
    let consensus = tally.at_least(contributions.len() as f64 * CONSENSUS_THRESHOLD);

    let listed: Vec<&str> = consensus.iter().take(CONSENSUS_WORD_LIMIT).copied().collect();
    let content = format!("Consensus points: {}", listed.join(", "));

    let ratio = consensus.len() as f64 / tally.distinct().max(1) as f64;
    let confidence = (ratio + average_confidence(contributions)) / 2.0;

    Merged::new(content, confidence)
}

/// Aspect bucket assigned by [`combine_complementary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    BriefInsight,
    SolutionApproach,
    ProblemIdentification,
    GeneralInput,
}

impl Aspect {
    /// Classify text; rules are tried in priority order
    pub fn classify(text: &str) -> Self {
        if text.chars().count() < BRIEF_INSIGHT_CHARS {
            return Aspect::BriefInsight;
        }
        let lower = text.to_lowercase();
        if lower.contains("solution") || lower.contains("approach") {
            Aspect::SolutionApproach
        } else if lower.contains("problem") || lower.contains("issue") {
            Aspect::ProblemIdentification
        } else {
            Aspect::GeneralInput
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::BriefInsight => "brief_insight",
            Aspect::SolutionApproach => "solution_approach",
            Aspect::ProblemIdentification => "problem_identification",
            Aspect::GeneralInput => "general_input",
        }
    }
}

/// One `[BUCKET]: ` block per non-empty aspect, in first-seen order
pub fn combine_complementary(contributions: &[&Contribution]) -> Merged {
    let aspects = group_ordered(contributions.iter().map(|c| (Aspect::classify(c.text_payload()), c.text_payload())));

    let content = aspects
        .iter()
        .map(|(aspect, texts)| format!("[{}]: {}", aspect.as_str().to_uppercase(), texts.join("; ")))
        .collect::<Vec<_>>()
        .join("\n\n");

    let confidence = diversity_boost(
        average_confidence(contributions),
        aspects.len(),
        ASPECT_DIVERSITY_CAP,
    )
    .min(1.0);

    Merged::new(content, confidence)
}

/// The highest-confidence contribution; the earliest wins a tie
pub fn competitive_evaluation(contributions: &[&Contribution]) -> Merged {
    let best = contributions.iter().copied().fold(None::<&Contribution>, |best, c| match best {
        Some(b) if b.confidence() >= c.confidence() => Some(b),
        _ => Some(c),
    });

    match best {
        Some(best) => Merged::new(
            format!(
                "[Selected for highest confidence: {:.2}] {}",
                best.confidence(),
                best.text_payload()
            ),
            best.confidence(),
        ),
        None => Merged::new(String::new(), 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(agent: &str, text: &str, confidence: f64) -> Contribution {
        Contribution::text(agent, text, confidence)
    }

    fn refs(items: &[Contribution]) -> Vec<&Contribution> {
        items.iter().collect()
    }

    #[test]
    fn test_synthesize_keeps_first_two_per_agent() {
        let items = vec![
            contribution("claude", "first point", 0.9),
            contribution("gpt", "other view", 0.8),
            contribution("claude", "second point", 0.9),
            contribution("claude", "third point", 0.9),
        ];
        let merged = synthesize(&refs(&items));
        assert_eq!(
            merged.content,
            "[claude Perspective]: first point; second point\n\n[gpt Perspective]: other view"
        );
    }

    #[test]
    fn test_synthesize_confidence() {
        let items = vec![
            contribution("a", "x", 0.5),
            contribution("b", "y", 0.5),
        ];
        let merged = synthesize(&refs(&items));
        // 0.5 * (1 + 2/5)
        assert!((merged.confidence - 0.7).abs() < 1e-9);

        let many: Vec<Contribution> = (0..6)
            .map(|i| contribution(&format!("agent-{i}"), "x", 0.9))
            .collect();
        assert_eq!(synthesize(&refs(&many)).confidence, 1.0);
    }

    #[test]
    fn test_consensus_includes_shared_word() {
        let items = vec![
            contribution("a", "Hash passwords with bcrypt always", 0.9),
            contribution("b", "Prefer bcrypt over plain sha256", 0.8),
            contribution("c", "Store only bcrypt digests", 0.7),
        ];
        let merged = find_consensus(&refs(&items));
        assert!(merged.content.starts_with("Consensus points: "));
        assert!(merged.content.contains("bcrypt"));
    }

    #[test]
    fn test_consensus_lists_at_most_ten_words() {
        let text = "alpha bravo charlie delta echoes foxtrot golf1 hotel india juliet kilo1 lima1";
        let items = vec![contribution("a", text, 0.6)];
        let merged = find_consensus(&refs(&items));
        let listed = merged.content.trim_start_matches("Consensus points: ");
        assert_eq!(listed.split(", ").count(), 10);
        // every word is consensus with a single contribution
        assert!((merged.confidence - (1.0 + 0.6) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_consensus_without_shared_words() {
        let items = vec![
            contribution("a", "alpha bravo", 0.4),
            contribution("b", "charlie delta", 0.4),
        ];
        let merged = find_consensus(&refs(&items));
        assert_eq!(merged.content, "Consensus points: ");
        assert!((merged.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_aspect_priority() {
        assert_eq!(Aspect::classify("short solution"), Aspect::BriefInsight);

        let long = |s: &str| format!("{s} {}", "x".repeat(120));
        assert_eq!(Aspect::classify(&long("The Approach")), Aspect::SolutionApproach);
        assert_eq!(
            Aspect::classify(&long("solution to the problem")),
            Aspect::SolutionApproach
        );
        assert_eq!(
            Aspect::classify(&long("an issue")),
            Aspect::ProblemIdentification
        );
        assert_eq!(Aspect::classify(&long("misc")), Aspect::GeneralInput);
    }

    #[test]
    fn test_complementary_blocks() {
        let long = format!("A complete solution needs {}", "detail ".repeat(20));
        let items = vec![
            contribution("a", "Short note here", 0.8),
            contribution("b", &long, 0.8),
            contribution("c", "Another short note", 0.8),
        ];
        let merged = combine_complementary(&refs(&items));
        assert_eq!(
            merged.content,
            format!(
                "[BRIEF_INSIGHT]: Short note here; Another short note\n\n[SOLUTION_APPROACH]: {long}"
            )
        );
        // 0.8 * (1 + 2/4) capped
        assert_eq!(merged.confidence, 1.0);
    }

    #[test]
    fn test_competitive_picks_highest_first_on_tie() {
        let items = vec![
            contribution("a", "first", 0.7),
            contribution("b", "second", 0.92),
            contribution("c", "third", 0.92),
        ];
        let merged = competitive_evaluation(&refs(&items));
        assert_eq!(merged.content, "[Selected for highest confidence: 0.92] second");
        assert_eq!(merged.confidence, 0.92);
    }
}
