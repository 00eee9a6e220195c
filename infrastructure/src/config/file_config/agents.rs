//! Agent directory configuration from TOML (`[agents]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw agents configuration from TOML
///
/// ```toml
/// [agents]
/// dir = "agents"   # one JSON file per agent
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    /// Directory scanned for `*.json` agent definitions
    pub dir: Option<PathBuf>,
}
