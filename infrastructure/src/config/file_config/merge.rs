//! Merge configuration from TOML (`[merge]` section)

use merge_application::MergeSettings;
use merge_domain::{ConfigIssue, ConfigIssueCode, MergeStrategy, MultiModalStrategy};
use serde::{Deserialize, Serialize};

/// Raw merge configuration from TOML
///
/// # Example
///
/// ```toml
/// [merge]
/// default_strategy = "consensus"                       # synthesis, consensus, complementary, competitive_evaluation
/// default_multimodal_strategy = "cross_modal_synthesis" # cross_modal_synthesis, modality_specific, multimodal_consensus
/// default_context = "user authentication"
/// auto_merge_threshold = 3
/// validation_enabled = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMergeConfig {
    pub default_strategy: String,
    pub default_multimodal_strategy: String,
    pub default_context: String,
    /// Unset disables automatic merging
    pub auto_merge_threshold: Option<usize>,
    pub validation_enabled: bool,
}

impl Default for FileMergeConfig {
    fn default() -> Self {
        Self {
            default_strategy: MergeStrategy::default().as_str().to_string(),
            default_multimodal_strategy: MultiModalStrategy::default().as_str().to_string(),
            default_context: String::new(),
            auto_merge_threshold: None,
            validation_enabled: true,
        }
    }
}

fn invalid_enum(
    field: &str,
    value: &str,
    valid_values: Vec<String>,
    fallback: &str,
) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values,
        },
        format!("{field}: unknown value '{value}', falling back to '{fallback}'"),
    )
}

impl FileMergeConfig {
    /// Parse `default_strategy`, warning on unknown tags.
    pub fn parse_default_strategy(&self) -> (MergeStrategy, Vec<ConfigIssue>) {
        let strategy = MergeStrategy::from(self.default_strategy.as_str());
        if strategy.is_recognized() {
            return (strategy, vec![]);
        }
        let valid = MergeStrategy::ALL.iter().map(ToString::to_string).collect();
        let fallback = MergeStrategy::default();
        let issue = invalid_enum(
            "merge.default_strategy",
            &self.default_strategy,
            valid,
            fallback.as_str(),
        );
        (fallback, vec![issue])
    }

    /// Parse `default_multimodal_strategy`, warning on unknown tags.
    pub fn parse_default_multimodal_strategy(&self) -> (MultiModalStrategy, Vec<ConfigIssue>) {
        let strategy = MultiModalStrategy::from(self.default_multimodal_strategy.as_str());
        if strategy.is_recognized() {
            return (strategy, vec![]);
        }
        let valid = MultiModalStrategy::ALL.iter().map(ToString::to_string).collect();
        let fallback = MultiModalStrategy::default();
        let issue = invalid_enum(
            "merge.default_multimodal_strategy",
            &self.default_multimodal_strategy,
            valid,
            fallback.as_str(),
        );
        (fallback, vec![issue])
    }

    /// Resolve the auto-merge threshold (0 = disabled).
    ///
    /// An explicit `0` is accepted but reported, since it reads like "merge
    /// immediately" while it actually turns automatic merging off.
    pub fn parse_auto_merge_threshold(&self) -> (usize, Vec<ConfigIssue>) {
        match self.auto_merge_threshold {
            None => (0, vec![]),
            Some(0) => (
                0,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::ZeroAutoMergeThreshold,
                    "merge.auto_merge_threshold: 0 disables automatic merging; omit the key instead",
                )],
            ),
            Some(n) => (n, vec![]),
        }
    }

    /// Build registry settings, collecting every issue found along the way.
    pub fn to_settings(&self) -> (MergeSettings, Vec<ConfigIssue>) {
        let (strategy, mut issues) = self.parse_default_strategy();
        let (multimodal, mm_issues) = self.parse_default_multimodal_strategy();
        let (threshold, threshold_issues) = self.parse_auto_merge_threshold();
        issues.extend(mm_issues);
        issues.extend(threshold_issues);

        let settings = MergeSettings::default()
            .with_default_strategy(strategy)
            .with_default_multimodal_strategy(multimodal)
            .with_default_context(self.default_context.clone())
            .with_auto_merge_threshold(threshold)
            .with_validation(self.validation_enabled);
        (settings, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_default_settings() {
        let (settings, issues) = FileMergeConfig::default().to_settings();
        assert!(issues.is_empty());
        assert_eq!(settings, MergeSettings::default());
    }

    #[test]
    fn test_strategy_aliases_are_accepted() {
        let config = FileMergeConfig {
            default_strategy: "competitive_eval".to_string(),
            default_multimodal_strategy: "cross_modal".to_string(),
            ..Default::default()
        };
        let (settings, issues) = config.to_settings();
        assert!(issues.is_empty());
        assert_eq!(settings.default_strategy, MergeStrategy::CompetitiveEval);
        assert_eq!(
            settings.default_multimodal_strategy,
            MultiModalStrategy::CrossModalSynthesis
        );
    }

    #[test]
    fn test_unknown_strategy_warns_and_falls_back() {
        let config = FileMergeConfig {
            default_strategy: "majority_vote".to_string(),
            ..Default::default()
        };
        let (strategy, issues) = config.parse_default_strategy();
        assert_eq!(strategy, MergeStrategy::Synthesis);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(issues[0].message.contains("majority_vote"));
        match &issues[0].code {
            ConfigIssueCode::InvalidEnumValue { valid_values, .. } => {
                assert_eq!(valid_values.len(), 4);
            }
            other => panic!("unexpected code: {other:?}"),
        }
    }

    #[test]
    fn test_zero_threshold_warns() {
        let config = FileMergeConfig {
            auto_merge_threshold: Some(0),
            ..Default::default()
        };
        let (threshold, issues) = config.parse_auto_merge_threshold();
        assert_eq!(threshold, 0);
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroAutoMergeThreshold);
    }

    #[test]
    fn test_threshold_and_validation_flow_into_settings() {
        let config = FileMergeConfig {
            auto_merge_threshold: Some(3),
            validation_enabled: false,
            ..Default::default()
        };
        let (settings, _) = config.to_settings();
        assert_eq!(settings.auto_merge_threshold, 3);
        assert!(!settings.validation_enabled);
    }
}
