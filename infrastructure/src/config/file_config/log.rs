//! Event log configuration from TOML (`[log]` section)

use merge_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name used when no explicit log path is configured
pub const DEFAULT_LOG_FILE: &str = "merge_events.jsonl";

/// Raw event log configuration from TOML
///
/// # Example
///
/// ```toml
/// [log]
/// enabled = true
/// path = "logs/merge_events.jsonl"
/// source = "ai_merge_system"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write the JSONL event log
    pub enabled: bool,
    /// Log file; defaults to the platform data directory
    pub path: Option<PathBuf>,
    /// Value of the `source` field on every record
    pub source: String,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            source: crate::logging::DEFAULT_SOURCE.to_string(),
        }
    }
}

impl FileLogConfig {
    /// Where events should be written, or `None` when logging is disabled.
    ///
    /// Falls back to `<data_dir>/ai-merge/merge_events.jsonl`, then to the
    /// working directory when the platform has no data directory.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        Some(
            dirs::data_dir()
                .map(|d| d.join("ai-merge").join(DEFAULT_LOG_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        )
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.enabled && self.source.trim().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyLogSource,
                "log.source cannot be empty while the event log is enabled",
            )]
        } else {
            vec![]
        }
    }
}
