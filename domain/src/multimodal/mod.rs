//! Multi-modal synthesis
//!
//! Contributions carry text or a media file reference. The engine validates
//! each one by its declared modality, picks a single output modality
//! (VIDEO > AUDIO > IMAGE > TEXT), and merges with a [`MultiModalStrategy`].

pub mod engine;
pub mod strategies;
pub mod strategy;

pub use engine::MultiModalSynthesisEngine;
pub use strategy::MultiModalStrategy;
