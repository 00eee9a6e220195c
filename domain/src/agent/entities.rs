//! Agent entity

use crate::contribution::modality::Modality;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A registered contribution source.
///
/// Created once at registration time and immutable afterwards. The
/// `confidence` is the agent's fixed self-reported reliability; it is copied
/// onto every contribution the agent submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier (e.g., "claude-001")
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered capability tags
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Self-reported reliability in [0, 1]
    pub confidence: f64,
    /// Free-text specialty
    #[serde(default)]
    pub specialty: String,
    /// Informational only
    #[serde(default)]
    pub response_time_ms: u64,
    /// Modalities this agent may submit
    #[serde(default = "default_modalities")]
    pub supported_modalities: BTreeSet<Modality>,
}

fn default_modalities() -> BTreeSet<Modality> {
    BTreeSet::from([Modality::Text])
}

impl Agent {
    /// Create a text-only agent
    pub fn new(id: impl Into<String>, name: impl Into<String>, confidence: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capabilities: Vec::new(),
            confidence,
            specialty: String::new(),
            response_time_ms: 0,
            supported_modalities: default_modalities(),
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn with_response_time_ms(mut self, ms: u64) -> Self {
        self.response_time_ms = ms;
        self
    }

    /// Replace the supported modality set
    pub fn with_modalities(mut self, modalities: impl IntoIterator<Item = Modality>) -> Self {
        self.supported_modalities = modalities.into_iter().collect();
        self
    }

    /// Whether this agent declared support for `modality`
    pub fn supports(&self, modality: Modality) -> bool {
        self.supported_modalities.contains(&modality)
    }

    /// Check the data-model constraints: non-empty id and confidence in [0, 1]
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidAgent("agent id cannot be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(DomainError::InvalidAgent(format!(
                "confidence for {} must be within [0, 1], got {}",
                self.id, self.confidence
            )));
        }
        Ok(())
    }
}
