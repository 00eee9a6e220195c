//! Application-level configuration.
//!
//! - [`MergeSettings`] — registry behavior (default strategy/context,
//!   automatic merging, validation switch)

pub mod merge_settings;

pub use merge_settings::MergeSettings;
