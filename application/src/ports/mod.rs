//! Ports (interfaces) for external adapters
//!
//! Infrastructure implements these; the registry only depends on the traits.

pub mod event_log;

pub use event_log::{EventLog, MergeEvent, NoEventLog};
