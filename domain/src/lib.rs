//! Domain layer for ai-merge
//!
//! This crate contains the core merge logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns; the
//! only I/O it performs is file-metadata lookups for media validation.
//!
//! # Core Concepts
//!
//! ## Contributions
//!
//! An [`Agent`] submits [`Contribution`]s: text, or a reference to an image,
//! audio or video file. Each contribution snapshots the agent's confidence
//! and carries a SHA-256 hash used as its stable identifier.
//!
//! ## Validation
//!
//! - [`ContributionValidator`]: completeness, coherence, relevance, consistency
//! - [`ModalityValidator`]: checks chosen by the contribution's [`Modality`]
//!
//! ## Merging
//!
//! - [`SynthesisEngine`] with a [`MergeStrategy`]
//! - [`MultiModalSynthesisEngine`] with a [`MultiModalStrategy`]
//!
//! Both return a [`MergeResult`]; empty or fully-invalid inputs produce a
//! zero-confidence placeholder result instead of an error.

pub mod agent;
pub mod config;
pub mod contribution;
pub mod core;
pub mod multimodal;
pub mod synthesis;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use agent::Agent;
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use contribution::{Content, Contribution, Metadata, MetadataValue, Modality};
pub use core::error::DomainError;
pub use multimodal::{MultiModalStrategy, MultiModalSynthesisEngine};
pub use synthesis::{MergeResult, MergeStrategy, SynthesisEngine, WordTally};
pub use validation::{
    AcceptAllValidator, CheckOutcome, ContributionCheck, ContributionValidator, ModalityValidator,
    ValidationResult, Validator,
};
