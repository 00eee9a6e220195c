//! Use cases
//!
//! - [`merge_registry`] — agent registration, contribution submission and
//!   merging behind a single lock

pub mod merge_registry;

pub use merge_registry::{MergeRegistry, RegistryError};
