//! Merge result value object

use crate::contribution::metadata::{Metadata, MetadataValue};
use crate::contribution::modality::Modality;
use crate::util::now_millis;
use crate::validation::result::ValidationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder content when a merge was asked to combine nothing
pub const NO_CONTRIBUTIONS: &str = "No contributions to merge";

/// Placeholder content when every contribution failed validation
pub const NO_VALID_CONTRIBUTIONS: &str = "No valid contributions to merge";

/// Placeholder content when a subset merge selected no stored contribution
pub const NO_MATCHING_CONTRIBUTIONS: &str = "No matching contributions to merge";

/// Metadata keys written by the engines
pub mod keys {
    pub const TOTAL_CONTRIBUTIONS: &str = "total_contributions";
    pub const VALID_CONTRIBUTIONS: &str = "valid_contributions";
    pub const STRATEGY: &str = "strategy";
    pub const INPUT_MODALITIES: &str = "input_modalities";
}

/// Outcome of one merge call
///
/// Created fresh per call and never mutated afterwards. Empty outcomes are
/// ordinary results with confidence 0.0 and no contributing agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Requested strategy tag
    pub strategy: String,
    pub merged_content: String,
    /// Distinct agents whose contributions survived validation, sorted
    pub contributing_agents: Vec<String>,
    /// Aggregate confidence in [0, 1]
    pub confidence_score: f64,
    pub metadata: Metadata,
    /// Validation outcome per contribution hash
    pub validation_results: BTreeMap<String, ValidationResult>,
    /// Epoch milliseconds
    pub timestamp: u64,
    /// Resolved output modality (multi-modal engine only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_modality: Option<Modality>,
}

impl MergeResult {
    /// Empty result carrying `message` as its content
    pub fn placeholder(strategy: impl Into<String>, message: &str) -> Self {
        let strategy = strategy.into();
        let mut metadata = Metadata::new();
        metadata.insert(keys::STRATEGY.to_string(), strategy.as_str().into());

        Self {
            strategy,
            merged_content: message.to_string(),
            contributing_agents: Vec::new(),
            confidence_score: 0.0,
            metadata,
            validation_results: BTreeMap::new(),
            timestamp: now_millis(),
            output_modality: None,
        }
    }

    /// Result for a merge that received no contributions at all
    pub fn no_contributions(strategy: impl Into<String>) -> Self {
        Self::placeholder(strategy, NO_CONTRIBUTIONS)
    }

    /// Result for a subset merge whose hashes matched nothing
    pub fn no_matching(strategy: impl Into<String>) -> Self {
        Self::placeholder(strategy, NO_MATCHING_CONTRIBUTIONS)
    }

    /// Result for a merge where nothing survived validation.
    ///
    /// Still carries the full validation map so callers can see why.
    pub fn no_valid(
        strategy: impl Into<String>,
        total: usize,
        validation_results: BTreeMap<String, ValidationResult>,
    ) -> Self {
        let mut result = Self::placeholder(strategy, NO_VALID_CONTRIBUTIONS);
        result
            .metadata
            .insert(keys::TOTAL_CONTRIBUTIONS.to_string(), total.into());
        result
            .metadata
            .insert(keys::VALID_CONTRIBUTIONS.to_string(), 0usize.into());
        result.validation_results = validation_results;
        result
    }

    pub fn with_output_modality(mut self, modality: Modality) -> Self {
        self.output_modality = Some(modality);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether any contribution made it into the merged content
    pub fn has_contributions(&self) -> bool {
        !self.contributing_agents.is_empty()
    }

    /// Number of contributions that failed validation
    pub fn rejected_count(&self) -> usize {
        self.validation_results.values().filter(|v| !v.valid).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_contributions_sentinel() {
        let result = MergeResult::no_contributions("synthesis");
        assert_eq!(result.merged_content, "No contributions to merge");
        assert_eq!(result.confidence_score, 0.0);
        assert!(result.contributing_agents.is_empty());
        assert!(!result.has_contributions());
        assert_eq!(
            result.metadata.get("strategy").and_then(|v| v.as_str()),
            Some("synthesis")
        );
    }

    #[test]
    fn test_no_valid_keeps_validation_map() {
        let mut map = BTreeMap::new();
        map.insert(
            "abc".to_string(),
            ValidationResult::from_issues(vec!["bad".to_string()]),
        );

        let result = MergeResult::no_valid("consensus", 1, map);
        assert_eq!(result.merged_content, NO_VALID_CONTRIBUTIONS);
        assert_eq!(result.rejected_count(), 1);
        assert_eq!(
            result
                .metadata
                .get(keys::TOTAL_CONTRIBUTIONS)
                .and_then(|v| v.as_f64()),
            Some(1.0)
        );
    }

    #[test]
    fn test_output_modality_skipped_when_absent() {
        let json = serde_json::to_value(MergeResult::no_matching("synthesis")).unwrap();
        assert!(json.get("output_modality").is_none());

        let json = serde_json::to_value(
            MergeResult::no_matching("synthesis").with_output_modality(Modality::Text),
        )
        .unwrap();
        assert_eq!(json["output_modality"], "text");
    }
}
