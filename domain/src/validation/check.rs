//! The shared check capability

use crate::contribution::entities::Contribution;

/// Result of one independent check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    issues: Vec<String>,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn fail(issue: impl Into<String>) -> Self {
        Self {
            issues: vec![issue.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<String> {
        self.issues
    }
}

/// One independent predicate over a contribution.
///
/// Checks must be total: any failure mode, including I/O errors, is reported
/// as an issue rather than propagated.
pub trait ContributionCheck: Send + Sync {
    /// Short identifier used in diagnostics
    fn name(&self) -> &'static str;

    /// Evaluate the contribution against an optional free-text context
    fn check(&self, contribution: &Contribution, context: &str) -> CheckOutcome;
}

/// Run checks in registration order and concatenate their issues
pub fn run_checks(
    checks: &[Box<dyn ContributionCheck>],
    contribution: &Contribution,
    context: &str,
) -> Vec<String> {
    checks
        .iter()
        .flat_map(|check| {
            let outcome = check.check(contribution, context);
            if !outcome.is_ok() {
                tracing::debug!(
                    check = check.name(),
                    hash = contribution.hash(),
                    "check failed"
                );
            }
            outcome.into_issues()
        })
        .collect()
}
