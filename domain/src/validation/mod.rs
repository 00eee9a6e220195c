//! Contribution validation
//!
//! Every check implements the single [`ContributionCheck`] capability and
//! reports problems as human-readable issue strings. Validators run an
//! ordered list of checks and fold the issues into a [`ValidationResult`]:
//!
//! - [`ContributionValidator`] — fixed text pipeline
//!   (completeness → coherence → relevance → consistency)
//! - [`ModalityValidator`] — dispatch table keyed by declared [`Modality`]
//!
//! [`Modality`]: crate::contribution::Modality

pub mod check;
pub mod media;
pub mod result;
pub mod text;
pub mod validator;

pub use check::{CheckOutcome, ContributionCheck};
pub use result::ValidationResult;
pub use validator::{AcceptAllValidator, ContributionValidator, ModalityValidator, Validator};
