//! Contribution entity

use super::content::Content;
use super::metadata::Metadata;
use super::modality::Modality;
use crate::core::string::char_prefix;
use crate::util::now_millis;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Number of leading text characters folded into the contribution hash
pub const HASH_TEXT_PREFIX_CHARS: usize = 100;

/// One piece of content submitted by an agent.
///
/// The confidence is a snapshot of the agent's confidence at submission time.
/// The hash is computed exactly once, at construction, and is the stable
/// external identifier used for subset selection. Fields are private so the
/// hash can never drift from the data it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    agent_id: String,
    content: Content,
    modality: Modality,
    /// Submission time (milliseconds since epoch)
    timestamp: u64,
    confidence: f64,
    metadata: Metadata,
    hash: String,
}

impl Contribution {
    /// Create a contribution stamped with the current time
    pub fn new(
        agent_id: impl Into<String>,
        content: Content,
        modality: Modality,
        confidence: f64,
    ) -> Self {
        Self::at(agent_id, content, modality, confidence, now_millis())
    }

    /// Create a text contribution stamped with the current time
    pub fn text(agent_id: impl Into<String>, text: impl Into<String>, confidence: f64) -> Self {
        Self::new(agent_id, Content::text(text), Modality::Text, confidence)
    }

    /// Create a contribution with an explicit timestamp
    pub fn at(
        agent_id: impl Into<String>,
        content: Content,
        modality: Modality,
        confidence: f64,
        timestamp: u64,
    ) -> Self {
        let agent_id = agent_id.into();
        let hash = Self::compute_hash(&agent_id, modality, timestamp, &content.fingerprint());
        Self {
            agent_id,
            content,
            modality,
            timestamp,
            confidence: confidence.clamp(0.0, 1.0),
            metadata: Metadata::new(),
            hash,
        }
    }

    /// Attach free-form metadata (not part of the hash)
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// SHA-256 over agent id, modality, timestamp and the first
    /// [`HASH_TEXT_PREFIX_CHARS`] characters of the content fingerprint
    /// (text, or the media path), as lowercase hex.
    pub fn compute_hash(agent_id: &str, modality: Modality, timestamp: u64, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(agent_id.as_bytes());
        hasher.update(modality.as_str().as_bytes());
        hasher.update(timestamp.to_string().as_bytes());
        hasher.update(char_prefix(text, HASH_TEXT_PREFIX_CHARS).as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The declared modality (may differ from `content().primary_modality()`)
    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Text payload, or the empty string for media-only contributions
    pub fn text_payload(&self) -> &str {
        self.content.text_or_empty()
    }
}
