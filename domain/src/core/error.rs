//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Validation failures and empty merges are *not* errors; they surface as
/// [`ValidationResult`](crate::validation::ValidationResult) issues and
/// sentinel [`MergeResult`](crate::synthesis::MergeResult)s respectively.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid agent: {0}")]
    InvalidAgent(String),

    #[error("Unknown modality: {0}")]
    UnknownModality(String),
}

impl DomainError {
    /// Check if this error was raised by agent validation
    pub fn is_invalid_agent(&self) -> bool {
        matches!(self, DomainError::InvalidAgent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_agent_display() {
        let error = DomainError::InvalidAgent("agent id cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid agent: agent id cannot be empty");
    }

    #[test]
    fn test_unknown_modality_display() {
        let error = DomainError::UnknownModality("smell".to_string());
        assert_eq!(error.to_string(), "Unknown modality: smell");
    }

    #[test]
    fn test_is_invalid_agent_check() {
        assert!(DomainError::InvalidAgent("x".to_string()).is_invalid_agent());
        assert!(!DomainError::UnknownModality("smell".to_string()).is_invalid_agent());
    }
}
