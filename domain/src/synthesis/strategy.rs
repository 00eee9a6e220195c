//! Merge strategy value object

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Algorithm used to combine valid contributions into one result
///
/// Parsing never fails: an unknown tag is kept as [`MergeStrategy::Unrecognized`]
/// and merged with the SYNTHESIS algorithm.
///
/// # Example
///
/// ```
/// use merge_domain::MergeStrategy;
///
/// let strategy: MergeStrategy = "competitive_evaluation".parse().unwrap();
/// assert_eq!(strategy, MergeStrategy::CompetitiveEval);
///
/// let unknown: MergeStrategy = "majority_vote".parse().unwrap();
/// assert_eq!(unknown.effective(), MergeStrategy::Synthesis);
/// assert_eq!(unknown.as_str(), "majority_vote");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MergeStrategy {
    /// Per-agent perspectives combined into one text (default)
    #[default]
    Synthesis,
    /// Words shared by most contributions
    Consensus,
    /// Contributions bucketed by the aspect they cover
    Complementary,
    /// Single highest-confidence contribution
    CompetitiveEval,
    /// Tag nobody recognized; merged as [`MergeStrategy::Synthesis`]
    Unrecognized(String),
}

impl MergeStrategy {
    /// Every recognized strategy, in presentation order
    pub const ALL: [MergeStrategy; 4] = [
        MergeStrategy::Synthesis,
        MergeStrategy::Consensus,
        MergeStrategy::Complementary,
        MergeStrategy::CompetitiveEval,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            MergeStrategy::Synthesis => "synthesis",
            MergeStrategy::Consensus => "consensus",
            MergeStrategy::Complementary => "complementary",
            MergeStrategy::CompetitiveEval => "competitive_evaluation",
            MergeStrategy::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, MergeStrategy::Unrecognized(_))
    }

    /// The strategy whose algorithm actually runs
    pub fn effective(&self) -> MergeStrategy {
        match self {
            MergeStrategy::Unrecognized(_) => MergeStrategy::Synthesis,
            other => other.clone(),
        }
    }

    /// Get a human-readable description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            MergeStrategy::Synthesis => "combine every agent's perspective",
            MergeStrategy::Consensus => "keep the points most contributions agree on",
            MergeStrategy::Complementary => "group contributions by the aspect they cover",
            MergeStrategy::CompetitiveEval => "select the most confident contribution",
            MergeStrategy::Unrecognized(_) => "unknown strategy, merged as synthesis",
        }
    }
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MergeStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "synthesis" => MergeStrategy::Synthesis,
            "consensus" => MergeStrategy::Consensus,
            "complementary" => MergeStrategy::Complementary,
            "competitive_evaluation" | "competitive_eval" | "competitive" => {
                MergeStrategy::CompetitiveEval
            }
            _ => MergeStrategy::Unrecognized(s.to_string()),
        })
    }
}

impl From<String> for MergeStrategy {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(strategy) => strategy,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for MergeStrategy {
    fn from(s: &str) -> Self {
        MergeStrategy::from(s.to_string())
    }
}

impl From<MergeStrategy> for String {
    fn from(strategy: MergeStrategy) -> Self {
        strategy.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let tags: Vec<&str> = MergeStrategy::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            tags,
            vec!["synthesis", "consensus", "complementary", "competitive_evaluation"]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(MergeStrategy::from("CONSENSUS"), MergeStrategy::Consensus);
        assert_eq!(
            MergeStrategy::from("competitive_eval"),
            MergeStrategy::CompetitiveEval
        );
    }

    #[test]
    fn test_unrecognized_keeps_tag_and_falls_back() {
        let strategy = MergeStrategy::from("majority_vote");
        assert!(!strategy.is_recognized());
        assert_eq!(strategy.to_string(), "majority_vote");
        assert_eq!(strategy.effective(), MergeStrategy::Synthesis);
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&MergeStrategy::CompetitiveEval).unwrap();
        assert_eq!(json, "\"competitive_evaluation\"");

        let parsed: MergeStrategy = serde_json::from_str("\"complementary\"").unwrap();
        assert_eq!(parsed, MergeStrategy::Complementary);
    }

    #[test]
    fn test_default_is_synthesis() {
        assert_eq!(MergeStrategy::default(), MergeStrategy::Synthesis);
    }
}
