//! Configuration file loading for ai-merge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AI_MERGE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ai-merge.toml` or `./.ai-merge.toml`
//! 4. Global: `<config_dir>/ai-merge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_LOG_FILE, FileAgentsConfig, FileConfig, FileLogConfig,
    FileMergeConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
