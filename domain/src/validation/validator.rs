//! Contribution validators

use super::check::{ContributionCheck, run_checks};
use super::media::{MediaProfile, MediaQualityCheck, MediaRelevanceCheck, MediaValidityCheck};
use super::result::ValidationResult;
use super::text::{
    CoherenceCheck, CompletenessCheck, ConsistencyCheck, RelevanceCheck, TEXT_SUBJECT,
    TextPayloadOnly,
};
use crate::contribution::entities::Contribution;
use crate::contribution::modality::Modality;
use std::collections::BTreeMap;

/// Anything that can turn a contribution into a [`ValidationResult`].
///
/// Implementations are stateless with respect to shared data and may be used
/// from several threads at once.
pub trait Validator: Send + Sync {
    fn validate(&self, contribution: &Contribution, context: &str) -> ValidationResult;
}

/// Text validator running a fixed, ordered pipeline:
/// completeness, coherence, relevance, consistency.
///
/// ```
/// use merge_domain::{Contribution, ContributionValidator, Validator};
///
/// let validator = ContributionValidator::new();
/// let result = validator.validate(&Contribution::text("claude-001", "Hi", 0.9), "");
/// assert!(!result.valid);
/// assert_eq!(result.issues, vec!["Contribution is too brief to be meaningful"]);
/// ```
pub struct ContributionValidator {
    checks: Vec<Box<dyn ContributionCheck>>,
}

impl ContributionValidator {
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(CompletenessCheck::default()),
                Box::new(CoherenceCheck::default()),
                Box::new(RelevanceCheck::default()),
                Box::new(ConsistencyCheck::default()),
            ],
        }
    }

    /// Append a check after the built-in ones
    pub fn with_check(mut self, check: impl ContributionCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Names of the registered checks, in execution order
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }
}

impl Default for ContributionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ContributionValidator {
    fn validate(&self, contribution: &Contribution, context: &str) -> ValidationResult {
        ValidationResult::from_issues(run_checks(&self.checks, contribution, context))
    }
}

/// Modality-aware validator.
///
/// Maps each declared modality to an ordered list of checks; only the list
/// for the contribution's own modality runs. MULTIMODAL has no checks and
/// always validates.
pub struct ModalityValidator {
    rules: BTreeMap<Modality, Vec<Box<dyn ContributionCheck>>>,
}

impl ModalityValidator {
    pub fn new() -> Self {
        let mut rules: BTreeMap<Modality, Vec<Box<dyn ContributionCheck>>> = BTreeMap::new();

        rules.insert(
            Modality::Text,
            vec![
                Box::new(TextPayloadOnly(CompletenessCheck::new(TEXT_SUBJECT))),
                Box::new(TextPayloadOnly(CoherenceCheck::new(TEXT_SUBJECT))),
                // Runs for any non-empty context
                Box::new(TextPayloadOnly(RelevanceCheck::new(TEXT_SUBJECT, 0))),
            ],
        );

        for modality in [Modality::Image, Modality::Audio, Modality::Video] {
            if let Some(profile) = MediaProfile::for_modality(modality) {
                rules.insert(
                    modality,
                    vec![
                        Box::new(MediaValidityCheck(profile)),
                        Box::new(MediaQualityCheck(profile)),
                        Box::new(MediaRelevanceCheck(profile)),
                    ],
                );
            }
        }

        Self { rules }
    }

    /// Append a check to the list for `modality`
    pub fn with_check(mut self, modality: Modality, check: impl ContributionCheck + 'static) -> Self {
        self.rules.entry(modality).or_default().push(Box::new(check));
        self
    }

    /// Names of the checks registered for `modality`, in execution order
    pub fn check_names(&self, modality: Modality) -> Vec<&'static str> {
        self.rules
            .get(&modality)
            .map(|checks| checks.iter().map(|c| c.name()).collect())
            .unwrap_or_default()
    }
}

impl Default for ModalityValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ModalityValidator {
    fn validate(&self, contribution: &Contribution, context: &str) -> ValidationResult {
        let issues = self
            .rules
            .get(&contribution.modality())
            .map(|checks| run_checks(checks, contribution, context))
            .unwrap_or_default();

        ValidationResult::from_issues(issues).with_modality(contribution.modality())
    }
}

/// Accepts every contribution without running any check.
///
/// Used when validation is switched off in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

impl Validator for AcceptAllValidator {
    fn validate(&self, contribution: &Contribution, _context: &str) -> ValidationResult {
        ValidationResult::from_issues(Vec::new()).with_modality(contribution.modality())
    }
}
