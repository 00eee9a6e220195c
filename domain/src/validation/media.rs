//! File-based stand-ins for media validation.
//!
//! No content analysis happens here: validity is file existence plus an
//! extension allow-list, quality is a minimum file size, relevance always
//! passes.

use super::check::{CheckOutcome, ContributionCheck};
use crate::contribution::entities::Contribution;
use crate::contribution::modality::Modality;
use std::path::Path;

/// Per-modality thresholds and allow-lists
#[derive(Debug, Clone, Copy)]
pub struct MediaProfile {
    pub modality: Modality,
    /// Allowed extensions, lowercase, without the leading dot
    pub extensions: &'static [&'static str],
    /// Files smaller than this many bytes are flagged
    pub min_bytes: u64,
    /// What a suspiciously small file probably is ("blank", "silent", ...)
    pub small_file_hint: &'static str,
}

pub const IMAGE_PROFILE: MediaProfile = MediaProfile {
    modality: Modality::Image,
    extensions: &["jpg", "jpeg", "png", "gif", "bmp", "webp"],
    min_bytes: 1024,
    small_file_hint: "blank",
};

pub const AUDIO_PROFILE: MediaProfile = MediaProfile {
    modality: Modality::Audio,
    extensions: &["mp3", "wav", "aac", "ogg", "flac"],
    min_bytes: 1024,
    small_file_hint: "silent",
};

pub const VIDEO_PROFILE: MediaProfile = MediaProfile {
    modality: Modality::Video,
    extensions: &["mp4", "avi", "mov", "mkv", "wmv"],
    min_bytes: 10240,
    small_file_hint: "empty",
};

impl MediaProfile {
    /// Profile for a media modality; `None` for TEXT and MULTIMODAL
    pub fn for_modality(modality: Modality) -> Option<&'static MediaProfile> {
        match modality {
            Modality::Image => Some(&IMAGE_PROFILE),
            Modality::Audio => Some(&AUDIO_PROFILE),
            Modality::Video => Some(&VIDEO_PROFILE),
            Modality::Text | Modality::Multimodal => None,
        }
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .is_some_and(|e| self.extensions.contains(&e.as_str()))
    }

    /// The file referenced by `contribution` when it belongs to this profile
    fn subject<'a>(&self, contribution: &'a Contribution) -> Option<&'a Path> {
        if contribution.modality() != self.modality {
            return None;
        }
        contribution.content().path_for(self.modality)
    }
}

/// Display form of a path's extension, including the dot (".txt", or "")
fn suffix(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// File must exist and carry an allowed extension
#[derive(Debug, Clone, Copy)]
pub struct MediaValidityCheck(pub &'static MediaProfile);

impl ContributionCheck for MediaValidityCheck {
    fn name(&self) -> &'static str {
        "media_validity"
    }

    fn check(&self, contribution: &Contribution, _context: &str) -> CheckOutcome {
        let Some(path) = self.0.subject(contribution) else {
            return CheckOutcome::pass();
        };
        let kind = self.0.modality.display_name();

        if !path.exists() {
            CheckOutcome::fail(format!("{kind} file does not exist: {}", path.display()))
        } else if !self.0.accepts_extension(path) {
            CheckOutcome::fail(format!(
                "Unsupported {} format: {}",
                self.0.modality.as_str(),
                suffix(path)
            ))
        } else {
            CheckOutcome::pass()
        }
    }
}

/// File must be at least `min_bytes` large; unreadable files are an issue
#[derive(Debug, Clone, Copy)]
pub struct MediaQualityCheck(pub &'static MediaProfile);

impl ContributionCheck for MediaQualityCheck {
    fn name(&self) -> &'static str {
        "media_quality"
    }

    fn check(&self, contribution: &Contribution, _context: &str) -> CheckOutcome {
        let Some(path) = self.0.subject(contribution) else {
            return CheckOutcome::pass();
        };
        let kind = self.0.modality.display_name();

        match std::fs::metadata(path) {
            Ok(meta) if meta.len() < self.0.min_bytes => CheckOutcome::fail(format!(
                "{kind} file size is unusually small, may be corrupted or {}",
                self.0.small_file_hint
            )),
            Ok(_) => CheckOutcome::pass(),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "media stat failed");
                CheckOutcome::fail(format!(
                    "Could not access {} file to check quality",
                    self.0.modality.as_str()
                ))
            }
        }
    }
}

/// Semantic relevance of non-text media is not assessed; always passes
#[derive(Debug, Clone, Copy)]
pub struct MediaRelevanceCheck(pub &'static MediaProfile);

impl ContributionCheck for MediaRelevanceCheck {
    fn name(&self) -> &'static str {
        "media_relevance"
    }

    fn check(&self, _contribution: &Contribution, _context: &str) -> CheckOutcome {
        CheckOutcome::pass()
    }
}
