//! Text synthesis
//!
//! [`SynthesisEngine`] validates a batch of contributions and merges the
//! survivors with one [`MergeStrategy`]:
//!
//! | Strategy | Output | Confidence |
//! |----------|--------|------------|
//! | `synthesis` | `[agent Perspective]: ...` per agent | avg × (1 + min(agents/5, 1)) |
//! | `consensus` | `Consensus points: ...` | (consensus/distinct + avg) / 2 |
//! | `complementary` | `[BUCKET]: ...` per aspect | avg × (1 + min(buckets/4, 1)) |
//! | `competitive_evaluation` | best contribution | its own confidence |

pub mod engine;
pub mod result;
pub mod strategies;
pub mod strategy;
pub mod tally;

pub use engine::SynthesisEngine;
pub use result::MergeResult;
pub use strategy::MergeStrategy;
pub use tally::WordTally;
