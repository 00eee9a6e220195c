//! Application layer for ai-merge
//!
//! This crate contains the contribution registry, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::MergeSettings;
pub use ports::event_log::{EventLog, MergeEvent, NoEventLog};
pub use use_cases::merge_registry::{MergeRegistry, RegistryError};
