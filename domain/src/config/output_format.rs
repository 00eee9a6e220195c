//! Output format value object

use serde::{Deserialize, Serialize};

/// How a merge result is rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header, merged content, agents and validation summary (default)
    #[default]
    Full,
    /// Only the merged content
    Content,
    /// The whole result as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Content => "content",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "content" => Ok(OutputFormat::Content),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format: {other}. Valid: full, content, json"
            )),
        }
    }
}
