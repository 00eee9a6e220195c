//! Modality value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The media kind of a contribution's payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Image,
    Audio,
    Video,
    /// Placeholder for content with no recognizable primary payload
    Multimodal,
}

impl Modality {
    /// Media tiers in output-resolution order (highest first).
    ///
    /// TEXT is the fallback when none of these is present.
    pub const OUTPUT_PRECEDENCE: [Modality; 3] = [Modality::Video, Modality::Audio, Modality::Image];

    /// The four concrete modalities a validator knows how to check
    pub const CONCRETE: [Modality; 4] = [
        Modality::Text,
        Modality::Image,
        Modality::Audio,
        Modality::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Image => "image",
            Modality::Audio => "audio",
            Modality::Video => "video",
            Modality::Multimodal => "multimodal",
        }
    }

    /// Capitalized name used in human-readable summaries ("Image", "Video")
    pub fn display_name(&self) -> &'static str {
        match self {
            Modality::Text => "Text",
            Modality::Image => "Image",
            Modality::Audio => "Audio",
            Modality::Video => "Video",
            Modality::Multimodal => "Multimodal",
        }
    }

    /// Whether this modality carries a file payload rather than text
    pub fn is_media(&self) -> bool {
        matches!(self, Modality::Image | Modality::Audio | Modality::Video)
    }

    /// Pick the single output modality for a heterogeneous set of inputs.
    ///
    /// VIDEO > AUDIO > IMAGE > TEXT; the first tier present wins and a set
    /// with no media at all (including an empty one) resolves to TEXT.
    ///
    /// ```
    /// use merge_domain::Modality;
    ///
    /// let inputs = [Modality::Text, Modality::Image];
    /// assert_eq!(Modality::resolve_output(inputs), Modality::Image);
    /// assert_eq!(Modality::resolve_output([]), Modality::Text);
    /// ```
    pub fn resolve_output(modalities: impl IntoIterator<Item = Modality>) -> Modality {
        let present: Vec<Modality> = modalities.into_iter().collect();
        Self::OUTPUT_PRECEDENCE
            .into_iter()
            .find(|tier| present.contains(tier))
            .unwrap_or(Modality::Text)
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Modality::Text),
            "image" => Ok(Modality::Image),
            "audio" => Ok(Modality::Audio),
            "video" => Ok(Modality::Video),
            "multimodal" => Ok(Modality::Multimodal),
            other => Err(DomainError::UnknownModality(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_prefers_media_over_text() {
        assert_eq!(
            Modality::resolve_output([Modality::Text, Modality::Image]),
            Modality::Image
        );
    }

    #[test]
    fn test_resolve_output_full_precedence() {
        assert_eq!(
            Modality::resolve_output([Modality::Image, Modality::Video, Modality::Audio]),
            Modality::Video
        );
        assert_eq!(
            Modality::resolve_output([Modality::Image, Modality::Audio]),
            Modality::Audio
        );
    }

    #[test]
    fn test_resolve_output_defaults_to_text() {
        assert_eq!(Modality::resolve_output([]), Modality::Text);
        assert_eq!(
            Modality::resolve_output([Modality::Multimodal]),
            Modality::Text
        );
    }

    #[test]
    fn test_parse_modality() {
        assert_eq!("IMAGE".parse::<Modality>().ok(), Some(Modality::Image));
        assert_eq!(" video ".parse::<Modality>().ok(), Some(Modality::Video));
        assert!("smell".parse::<Modality>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Modality::Audio).unwrap();
        assert_eq!(json, "\"audio\"");
    }

    #[test]
    fn test_is_media() {
        assert!(Modality::Image.is_media());
        assert!(!Modality::Text.is_media());
        assert!(!Modality::Multimodal.is_media());
    }
}
