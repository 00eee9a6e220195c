//! Contribution domain
//!
//! A [`Contribution`](entities::Contribution) is one opinion submitted by an
//! agent: a [`Content`](content::Content) payload, its declared
//! [`Modality`](modality::Modality), a confidence snapshot, open
//! [`Metadata`](metadata::Metadata) and a content-derived hash.

pub mod content;
pub mod entities;
pub mod metadata;
pub mod modality;

pub use content::Content;
pub use entities::Contribution;
pub use metadata::{Metadata, MetadataValue};
pub use modality::Modality;
