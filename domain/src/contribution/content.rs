//! Multi-modal content payload

use super::metadata::Metadata;
use super::modality::Modality;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Content carried by a contribution.
///
/// Holds at most one primary payload in practice (the constructors populate
/// exactly one slot); when several slots are filled, [`primary_modality`]
/// decides which one counts.
///
/// [`primary_modality`]: Content::primary_modality
///
/// ```
/// use merge_domain::{Content, Modality};
///
/// assert_eq!(Content::text("hello").primary_modality(), Modality::Text);
/// assert_eq!(Content::video("demo.mp4").primary_modality(), Modality::Video);
/// assert_eq!(Content::default().primary_modality(), Modality::Multimodal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn audio(path: impl Into<PathBuf>) -> Self {
        Self {
            audio_path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn video(path: impl Into<PathBuf>) -> Self {
        Self {
            video_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Build content for a media modality from a file path.
    ///
    /// Returns `None` for TEXT and MULTIMODAL, which carry no file.
    pub fn media(modality: Modality, path: impl Into<PathBuf>) -> Option<Self> {
        match modality {
            Modality::Image => Some(Self::image(path)),
            Modality::Audio => Some(Self::audio(path)),
            Modality::Video => Some(Self::video(path)),
            Modality::Text | Modality::Multimodal => None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Which payload slot is populated, in fixed precedence
    /// video > audio > image > text; nothing populated yields MULTIMODAL.
    pub fn primary_modality(&self) -> Modality {
        if self.video_path.is_some() {
            Modality::Video
        } else if self.audio_path.is_some() {
            Modality::Audio
        } else if self.image_path.is_some() {
            Modality::Image
        } else if self.has_text() {
            Modality::Text
        } else {
            Modality::Multimodal
        }
    }

    /// True when a non-empty text payload is present
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The text payload, or the empty string when there is none
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Text identifying the payload: the text itself, or the primary media
    /// path when there is no text
    pub fn fingerprint(&self) -> Cow<'_, str> {
        if self.has_text() {
            return Cow::Borrowed(self.text_or_empty());
        }
        match self.path_for(self.primary_modality()) {
            Some(path) => path.to_string_lossy(),
            None => Cow::Borrowed(""),
        }
    }

    /// The file path stored in the slot for `modality`, if any
    pub fn path_for(&self, modality: Modality) -> Option<&Path> {
        match modality {
            Modality::Image => self.image_path.as_deref(),
            Modality::Audio => self.audio_path.as_deref(),
            Modality::Video => self.video_path.as_deref(),
            Modality::Text | Modality::Multimodal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_modality_precedence() {
        let content = Content {
            text: Some("caption".to_string()),
            image_path: Some("a.png".into()),
            audio_path: Some("a.mp3".into()),
            ..Default::default()
        };
        assert_eq!(content.primary_modality(), Modality::Audio);

        let content = Content {
            text: Some("caption".to_string()),
            image_path: Some("a.png".into()),
            ..Default::default()
        };
        assert_eq!(content.primary_modality(), Modality::Image);
    }

    #[test]
    fn test_empty_text_is_not_a_payload() {
        assert_eq!(Content::text("").primary_modality(), Modality::Multimodal);
        assert!(!Content::text("").has_text());
    }

    #[test]
    fn test_media_constructor() {
        let content = Content::media(Modality::Audio, "talk.wav").unwrap();
        assert_eq!(content.path_for(Modality::Audio), Some(Path::new("talk.wav")));
        assert!(Content::media(Modality::Text, "x").is_none());
    }

    #[test]
    fn test_text_or_empty() {
        assert_eq!(Content::image("x.png").text_or_empty(), "");
        assert_eq!(Content::text("abc").text_or_empty(), "abc");
    }
}
