//! Validation result value object

use crate::contribution::modality::Modality;
use serde::{Deserialize, Serialize};

/// Cost of a single issue against the quality score
pub const ISSUE_PENALTY: f64 = 0.1;

/// Maximum total deduction from the quality score
pub const MAX_PENALTY: f64 = 0.5;

/// Outcome of validating one contribution.
///
/// Recomputed on every validation call and never stored on the contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// AND of every check that ran
    pub valid: bool,
    /// Issues in check-registration order
    pub issues: Vec<String>,
    /// 1.0 minus 0.1 per issue, deduction capped at 0.5
    pub quality_score: f64,
    /// Declared modality (set by the modality-aware validator only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
}

impl ValidationResult {
    /// Build a result from the issues collected across all checks
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            valid: issues.is_empty(),
            quality_score: Self::quality_score_for(issues.len()),
            issues,
            modality: None,
        }
    }

    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = Some(modality);
        self
    }

    /// `max(0, min(1, 1.0 - min(issue_count * 0.1, 0.5)))`
    ///
    /// ```
    /// use merge_domain::ValidationResult;
    ///
    /// assert_eq!(ValidationResult::quality_score_for(0), 1.0);
    /// assert_eq!(ValidationResult::quality_score_for(9), 0.5);
    /// ```
    pub fn quality_score_for(issue_count: usize) -> f64 {
        let deduction = (issue_count as f64 * ISSUE_PENALTY).min(MAX_PENALTY);
        (1.0 - deduction).clamp(0.0, 1.0)
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_issues_is_valid() {
        let result = ValidationResult::from_issues(vec![]);
        assert!(result.valid);
        assert_eq!(result.quality_score, 1.0);
    }

    #[test]
    fn test_issues_make_invalid() {
        let result = ValidationResult::from_issues(vec!["too short".to_string()]);
        assert!(!result.valid);
        assert_eq!(result.quality_score, 1.0 - 0.1);
    }

    #[test]
    fn test_quality_score_monotonic_and_capped() {
        let mut previous = ValidationResult::quality_score_for(0);
        for count in 1..20 {
            let score = ValidationResult::quality_score_for(count);
            assert!(score <= previous);
            assert!((0.0..=1.0).contains(&score));
            previous = score;
        }
        assert_eq!(ValidationResult::quality_score_for(5), 0.5);
        assert_eq!(ValidationResult::quality_score_for(100), 0.5);
    }

    #[test]
    fn test_quality_score_matches_formula_exactly() {
        for count in 0..8usize {
            let expected = (1.0 - (count as f64 * 0.1).min(0.5)).clamp(0.0, 1.0);
            assert_eq!(ValidationResult::quality_score_for(count), expected);
        }
    }
}
