//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — preview / prefix helpers used for hashing and logging

pub mod error;
pub mod string;
