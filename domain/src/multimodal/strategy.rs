//! Multi-modal merge strategy value object

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Algorithm used by the multi-modal engine
///
/// Unknown tags are kept and merged as a plain text synthesis of whatever
/// text the contributions carry.
///
/// ```
/// use merge_domain::MultiModalStrategy;
///
/// let strategy: MultiModalStrategy = "modality_specific".parse().unwrap();
/// assert_eq!(strategy, MultiModalStrategy::ModalitySpecific);
/// assert!(!MultiModalStrategy::from("synthesis").is_recognized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MultiModalStrategy {
    /// One summary line per contribution (default)
    #[default]
    CrossModalSynthesis,
    /// One summary line per modality group
    ModalitySpecific,
    /// Most frequent words across text payloads
    MultimodalConsensus,
    /// Anything else; merged as agent-prefixed text
    Unrecognized(String),
}

impl MultiModalStrategy {
    pub const ALL: [MultiModalStrategy; 3] = [
        MultiModalStrategy::CrossModalSynthesis,
        MultiModalStrategy::ModalitySpecific,
        MultiModalStrategy::MultimodalConsensus,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            MultiModalStrategy::CrossModalSynthesis => "cross_modal_synthesis",
            MultiModalStrategy::ModalitySpecific => "modality_specific",
            MultiModalStrategy::MultimodalConsensus => "multimodal_consensus",
            MultiModalStrategy::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, MultiModalStrategy::Unrecognized(_))
    }
}

impl std::fmt::Display for MultiModalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MultiModalStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "cross_modal_synthesis" | "cross_modal" => MultiModalStrategy::CrossModalSynthesis,
            "modality_specific" => MultiModalStrategy::ModalitySpecific,
            "multimodal_consensus" => MultiModalStrategy::MultimodalConsensus,
            _ => MultiModalStrategy::Unrecognized(s.to_string()),
        })
    }
}

impl From<String> for MultiModalStrategy {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(strategy) => strategy,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for MultiModalStrategy {
    fn from(s: &str) -> Self {
        MultiModalStrategy::from(s.to_string())
    }
}

impl From<MultiModalStrategy> for String {
    fn from(strategy: MultiModalStrategy) -> Self {
        strategy.as_str().to_string()
    }
}
