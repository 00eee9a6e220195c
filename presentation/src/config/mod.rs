//! Presentation-level configuration
//!
//! Configuration for output formatting.

use merge_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How merge results are rendered
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over file settings
    pub fn resolve(
        file_format: Option<OutputFormat>,
        file_color: bool,
        cli_format: Option<OutputFormat>,
        no_color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color: file_color && !no_color,
        }
    }

    /// Apply the color setting process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Json),
            true,
            Some(OutputFormat::Content),
            false,
        );
        assert_eq!(config.format, OutputFormat::Content);
        assert!(config.color);
    }

    #[test]
    fn test_file_format_used_without_flag() {
        let config = OutputConfig::resolve(Some(OutputFormat::Json), true, None, true);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_defaults() {
        let config = OutputConfig::resolve(None, false, None, false);
        assert_eq!(config, OutputConfig { format: OutputFormat::Full, color: false });
    }
}
