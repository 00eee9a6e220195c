//! Loading [`Agent`] definitions from JSON files

use merge_domain::{Agent, DomainError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AgentFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse agent file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid agent in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Reads agent JSON files from disk
pub struct AgentFileLoader;

impl AgentFileLoader {
    /// Load a single agent file and check its constraints
    pub fn load_file(path: &Path) -> Result<Agent, AgentFileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AgentFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let agent: Agent = serde_json::from_str(&raw).map_err(|source| AgentFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        agent.validate().map_err(|source| AgentFileError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(agent)
    }

    /// Load every `*.json` file in `dir`, in file-name order.
    ///
    /// Stops at the first bad file so a typo never silently drops an agent.
    pub fn load_dir(dir: &Path) -> Result<Vec<Agent>, AgentFileError> {
        let io_err = |source| AgentFileError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let agents = paths
            .iter()
            .map(|path| Self::load_file(path))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(dir = %dir.display(), count = agents.len(), "Loaded agent files");
        Ok(agents)
    }
}
