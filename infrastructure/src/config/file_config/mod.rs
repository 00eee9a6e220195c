//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! String-valued enums stay strings here and are parsed with warnings so a
//! typo degrades to the default instead of failing the whole load.

mod agents;
mod log;
mod merge;

pub use agents::FileAgentsConfig;
pub use log::{DEFAULT_LOG_FILE, FileLogConfig};
pub use merge::FileMergeConfig;

use merge_domain::{ConfigIssue, OutputFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when validation finds at least one error-severity issue
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n  {}", .0.join("\n  "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Merge defaults and registry behavior
    pub merge: FileMergeConfig,
    /// JSONL event log
    pub log: FileLogConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Agent definition files
    pub agents: FileAgentsConfig,
}

/// `[output]` section. The CLI `--format` flag wins over `format`.
///
/// ```toml
/// [output]
/// format = "content"   # full, content, json
/// color = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.merge.to_settings().1;
        issues.extend(self.log.validate());
        issues
    }

    /// Validate and split: errors fail, warnings are returned for display.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|issue| issue.message).collect(),
            ))
        }
    }
}
