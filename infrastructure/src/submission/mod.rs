//! Batch submission files
//!
//! A submission file lists contributions to feed into a [`MergeRegistry`]
//! in one go, which is how the CLI `merge` command gets its input:
//!
//! ```json
//! {
//!   "context": "user authentication",
//!   "contributions": [
//!     { "agent_id": "claude-001", "text": "Use JWT tokens with expiry" },
//!     { "agent_id": "gemini-001", "image": "diagrams/flow.png",
//!       "metadata": { "aspect": "architecture" } }
//!   ]
//! }
//! ```
//!
//! [`MergeRegistry`]: merge_application::MergeRegistry

mod file;

pub use file::{SubmissionEntry, SubmissionError, SubmissionFile};
