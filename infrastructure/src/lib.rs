//! Infrastructure layer for ai-merge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and input file loading.

pub mod agent_files;
pub mod config;
pub mod logging;
pub mod submission;

// Re-export commonly used types
pub use agent_files::{AgentFileError, AgentFileLoader};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentsConfig, FileConfig, FileLogConfig,
    FileMergeConfig, FileOutputConfig,
};
pub use logging::JsonlEventLog;
pub use submission::{SubmissionEntry, SubmissionError, SubmissionFile};
