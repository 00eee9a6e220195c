//! Agent definition files
//!
//! Agents can be declared as one JSON document per file:
//!
//! ```json
//! {
//!   "id": "reviewer-1a2b3c4d",
//!   "name": "Reviewer",
//!   "capabilities": ["coding", "technical"],
//!   "confidence": 0.88,
//!   "specialty": "Code review",
//!   "supported_modalities": ["text", "image"],
//!   "response_time_ms": 900
//! }
//! ```

mod loader;

pub use loader::{AgentFileError, AgentFileLoader};
