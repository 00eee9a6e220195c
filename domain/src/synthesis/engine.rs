//! Text synthesis engine

use super::result::{MergeResult, keys};
use super::strategies::{self, Merged};
use super::strategy::MergeStrategy;
use crate::contribution::entities::Contribution;
use crate::contribution::metadata::{MetadataValue, metadata};
use crate::util::now_millis;
use crate::validation::result::ValidationResult;
use crate::validation::validator::{ContributionValidator, Validator};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// Contributions that passed validation plus the verdict for every input
pub struct Screened<'a> {
    pub valid: Vec<&'a Contribution>,
    pub validation_results: BTreeMap<String, ValidationResult>,
}

impl<'a> Screened<'a> {
    /// Sorted distinct agent ids of the valid contributions
    pub fn contributing_agents(&self) -> Vec<String> {
        self.valid
            .iter()
            .map(|c| c.agent_id())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Validate every contribution, keyed by hash, and keep the valid ones
pub fn screen<'a>(
    validator: &dyn Validator,
    contributions: &'a [Contribution],
    context: &str,
) -> Screened<'a> {
    let mut valid = Vec::with_capacity(contributions.len());
    let mut validation_results = BTreeMap::new();

    for contribution in contributions {
        let result = validator.validate(contribution, context);
        if result.valid {
            valid.push(contribution);
        }
        validation_results.insert(contribution.hash().to_string(), result);
    }

    Screened {
        valid,
        validation_results,
    }
}

/// Validates contributions and merges the survivors with one strategy.
///
/// Holds no mutable state; a single engine can serve concurrent callers.
///
/// # Example
///
/// ```
/// use merge_domain::{Contribution, MergeStrategy, SynthesisEngine};
///
/// let contributions = vec![
///     Contribution::text("claude-001", "Hi", 0.9),
///     Contribution::text("claude-001", "Store passwords with bcrypt and a per-user salt.", 0.9),
/// ];
///
/// let result = SynthesisEngine::new().merge_contributions(
///     &contributions,
///     &MergeStrategy::Synthesis,
///     "",
/// );
/// assert_eq!(result.contributing_agents, vec!["claude-001"]);
/// assert!(result.merged_content.starts_with("[claude-001 Perspective]: Store passwords"));
/// ```
pub struct SynthesisEngine {
    validator: Box<dyn Validator>,
}

impl SynthesisEngine {
    pub fn new() -> Self {
        Self::with_validator(ContributionValidator::new())
    }

    pub fn with_validator(validator: impl Validator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }

    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    pub fn merge_contributions(
        &self,
        contributions: &[Contribution],
        strategy: &MergeStrategy,
        context: &str,
    ) -> MergeResult {
        if contributions.is_empty() {
            return MergeResult::no_contributions(strategy.as_str());
        }

        let screened = screen(self.validator.as_ref(), contributions, context);
        if screened.valid.is_empty() {
            info!(
                strategy = %strategy,
                total = contributions.len(),
                "No contribution passed validation"
            );
            return MergeResult::no_valid(
                strategy.as_str(),
                contributions.len(),
                screened.validation_results,
            );
        }

        let merged = Self::apply(strategy, &screened.valid);

        info!(
            strategy = %strategy,
            total = contributions.len(),
            valid = screened.valid.len(),
            confidence = merged.confidence,
            "Merged contributions"
        );

        MergeResult {
            strategy: strategy.as_str().to_string(),
            merged_content: merged.content,
            contributing_agents: screened.contributing_agents(),
            confidence_score: merged.confidence.clamp(0.0, 1.0),
            metadata: metadata([
                (keys::TOTAL_CONTRIBUTIONS, MetadataValue::from(contributions.len())),
                (keys::VALID_CONTRIBUTIONS, MetadataValue::from(screened.valid.len())),
                (keys::STRATEGY, MetadataValue::from(strategy.as_str())),
            ]),
            validation_results: screened.validation_results,
            timestamp: now_millis(),
            output_modality: None,
        }
    }

    fn apply(strategy: &MergeStrategy, valid: &[&Contribution]) -> Merged {
        match strategy {
            MergeStrategy::Synthesis => strategies::synthesize(valid),
            MergeStrategy::Consensus => strategies::find_consensus(valid),
            MergeStrategy::Complementary => strategies::combine_complementary(valid),
            MergeStrategy::CompetitiveEval => strategies::competitive_evaluation(valid),
            MergeStrategy::Unrecognized(tag) => {
                warn!(strategy = %tag, "Unknown merge strategy, using synthesis");
                strategies::synthesize(valid)
            }
        }
    }
}

impl Default for SynthesisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIFTY_CHARS: &str = "Hash every password with bcrypt before storing it.";

    fn auth_contributions() -> Vec<Contribution> {
        vec![
            Contribution::text(
                "claude-001",
                "Use bcrypt for password hashing and JWT tokens for stateless sessions.",
                0.92,
            ),
            Contribution::text(
                "gpt-001",
                "Rate limit the login endpoint and hash passwords with bcrypt.",
                0.89,
            ),
            Contribution::text(
                "gemini-001",
                "Store credentials hashed with bcrypt and rotate refresh tokens.",
                0.88,
            ),
        ]
    }

    #[test]
    fn test_empty_input_sentinel_for_every_strategy() {
        let engine = SynthesisEngine::new();
        for strategy in MergeStrategy::ALL {
            let result = engine.merge_contributions(&[], &strategy, "");
            assert_eq!(result.merged_content, "No contributions to merge");
            assert_eq!(result.confidence_score, 0.0);
            assert!(result.contributing_agents.is_empty());
        }
    }

    #[test]
    fn test_brief_contribution_is_dropped() {
        assert_eq!(FIFTY_CHARS.chars().count(), 50);
        let contributions = vec![
            Contribution::text("claude-001", "Hi", 0.9),
            Contribution::text("claude-001", FIFTY_CHARS, 0.9),
        ];

        let result = SynthesisEngine::new().merge_contributions(
            &contributions,
            &MergeStrategy::Synthesis,
            "",
        );

        assert_eq!(result.contributing_agents, vec!["claude-001"]);
        assert_eq!(
            result.merged_content,
            format!("[claude-001 Perspective]: {FIFTY_CHARS}")
        );
        assert_eq!(result.validation_results.len(), 2);
        assert_eq!(result.rejected_count(), 1);
        assert_eq!(
            result
                .metadata
                .get(keys::VALID_CONTRIBUTIONS)
                .and_then(|v| v.as_f64()),
            Some(1.0)
        );
    }

    #[test]
    fn test_nothing_valid_keeps_validation_map() {
        let contributions = vec![
            Contribution::text("a", "Hi", 0.9),
            Contribution::text("b", "Cut off...", 0.9),
        ];
        let result = SynthesisEngine::new().merge_contributions(
            &contributions,
            &MergeStrategy::Consensus,
            "",
        );
        assert_eq!(result.merged_content, "No valid contributions to merge");
        assert_eq!(result.confidence_score, 0.0);
        assert!(result.contributing_agents.is_empty());
        assert_eq!(result.validation_results.len(), 2);
        assert!(result.validation_results.values().all(|v| !v.valid));
    }

    #[test]
    fn test_consensus_finds_bcrypt() {
        let result = SynthesisEngine::new().merge_contributions(
            &auth_contributions(),
            &MergeStrategy::Consensus,
            "",
        );
        assert!(result.merged_content.starts_with("Consensus points: "));
        assert!(result.merged_content.contains("bcrypt"));
        assert_eq!(
            result.contributing_agents,
            vec!["claude-001", "gemini-001", "gpt-001"]
        );
    }

    #[test]
    fn test_competitive_eval_uses_max_confidence() {
        let result = SynthesisEngine::new().merge_contributions(
            &auth_contributions(),
            &MergeStrategy::CompetitiveEval,
            "",
        );
        assert!(
            result
                .merged_content
                .starts_with("[Selected for highest confidence: 0.92] ")
        );
        assert_eq!(result.confidence_score, 0.92);
    }

    #[test]
    fn test_unrecognized_strategy_falls_back_to_synthesis() {
        let engine = SynthesisEngine::new();
        let contributions = auth_contributions();

        let fallback =
            engine.merge_contributions(&contributions, &MergeStrategy::from("weighted"), "");
        let synthesis = engine.merge_contributions(&contributions, &MergeStrategy::Synthesis, "");

        assert_eq!(fallback.merged_content, synthesis.merged_content);
        assert_eq!(fallback.strategy, "weighted");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let engine = SynthesisEngine::new();
        let contributions = auth_contributions();
        let context = "password storage for the login service";

        for strategy in MergeStrategy::ALL {
            let first = engine.merge_contributions(&contributions, &strategy, context);
            let second = engine.merge_contributions(&contributions, &strategy, context);
            assert_eq!(first.merged_content, second.merged_content);
            assert_eq!(first.confidence_score, second.confidence_score);
        }
    }

    #[test]
    fn test_confidence_always_in_unit_range() {
        let engine = SynthesisEngine::new();
        for strategy in MergeStrategy::ALL {
            let result = engine.merge_contributions(&auth_contributions(), &strategy, "");
            assert!((0.0..=1.0).contains(&result.confidence_score));
        }
    }

    #[test]
    fn test_context_relevance_filters() {
        let contributions = vec![Contribution::text(
            "claude-001",
            "Bake the bread at two hundred degrees for forty minutes.",
            0.9,
        )];
        let result = SynthesisEngine::new().merge_contributions(
            &contributions,
            &MergeStrategy::Synthesis,
            "implementing a secure user authentication system",
        );
        assert_eq!(result.merged_content, "No valid contributions to merge");
        assert_eq!(
            result.validation_results.values().next().map(|v| v.issues.clone()),
            Some(vec!["Contribution appears unrelated to context".to_string()])
        );
    }
}
