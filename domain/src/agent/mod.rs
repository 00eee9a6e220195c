//! Agent domain
//!
//! An [`Agent`](entities::Agent) is a named producer of contributions with a
//! fixed self-reported confidence and a declared set of modalities.

pub mod entities;

pub use entities::Agent;
