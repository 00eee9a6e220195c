//! Submission file parsing and replay into the registry

use merge_application::{MergeRegistry, RegistryError};
use merge_domain::{Content, Metadata, Modality};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Failed to read submission file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse submission file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Entry {index} ({agent_id}) must carry exactly one of text, image, audio, video")]
    AmbiguousPayload { index: usize, agent_id: String },

    #[error("Entry {index}: {source}")]
    Registry {
        index: usize,
        #[source]
        source: RegistryError,
    },
}

/// One contribution in a submission file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionEntry {
    pub agent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl SubmissionEntry {
    /// The single payload of this entry, or `None` if zero or several are set.
    ///
    /// Relative media paths are joined onto `base_dir`.
    fn payload(&self, base_dir: &Path) -> Option<Payload<'_>> {
        let resolve = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base_dir.join(p)
            }
        };

        let mut slots = [
            self.text.as_deref().map(Payload::Text),
            self.image
                .as_ref()
                .map(|p| Payload::Media(Modality::Image, Content::image(resolve(p)))),
            self.audio
                .as_ref()
                .map(|p| Payload::Media(Modality::Audio, Content::audio(resolve(p)))),
            self.video
                .as_ref()
                .map(|p| Payload::Media(Modality::Video, Content::video(resolve(p)))),
        ]
        .into_iter()
        .flatten();

        match (slots.next(), slots.next()) {
            (Some(payload), None) => Some(payload),
            _ => None,
        }
    }
}

enum Payload<'a> {
    Text(&'a str),
    Media(Modality, Content),
}

/// A batch of contributions plus the context to validate them against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFile {
    #[serde(default)]
    pub context: Option<String>,
    pub contributions: Vec<SubmissionEntry>,
    /// Directory relative media paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl SubmissionFile {
    pub fn load(path: &Path) -> Result<Self, SubmissionError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SubmissionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut file: SubmissionFile =
            serde_json::from_str(&raw).map_err(|source| SubmissionError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        file.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(file)
    }

    /// Submit every entry in order, returning the contribution hashes.
    ///
    /// Every entry needs an agent that declared the entry's modality,
    /// text included. Stops at the first rejected entry.
    pub fn submit_all(&self, registry: &MergeRegistry) -> Result<Vec<String>, SubmissionError> {
        let mut hashes = Vec::with_capacity(self.contributions.len());

        for (index, entry) in self.contributions.iter().enumerate() {
            let payload = entry.payload(&self.base_dir).ok_or_else(|| {
                SubmissionError::AmbiguousPayload {
                    index,
                    agent_id: entry.agent_id.clone(),
                }
            })?;

            let metadata = entry.metadata.clone();
            let submitted = match payload {
                Payload::Text(text) => registry.submit_text(&entry.agent_id, text, metadata),
                Payload::Media(modality, content) => {
                    registry.submit(&entry.agent_id, content, modality, metadata)
                }
            };

            let hash = submitted.map_err(|source| SubmissionError::Registry { index, source })?;
            debug!(index, agent_id = %entry.agent_id, "Submitted entry");
            hashes.push(hash);
        }

        Ok(hashes)
    }

    /// Whether any entry carries a media file
    pub fn has_media(&self) -> bool {
        self.contributions
            .iter()
            .any(|e| e.image.is_some() || e.audio.is_some() || e.video.is_some())
    }
}
