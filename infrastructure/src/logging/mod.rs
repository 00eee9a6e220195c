//! Structured event logging adapters

mod jsonl_event_log;

pub use jsonl_event_log::{DEFAULT_SOURCE, JsonlEventLog};
