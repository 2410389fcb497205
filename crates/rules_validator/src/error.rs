//! Error type for validation runs.

use rules_core::{InvalidRuleError, ValidationFailure};
use thiserror::Error;

/// Errors a validation run can produce.
///
/// The two variants are deliberately distinct in kind: `Failed` is the
/// expected outcome of bad input and carries per-parameter detail for the
/// caller to surface, while `InvalidRule` signals a bug in the calling
/// validator's rule declarations and should not be handled as a business
/// error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more business rules were violated
    #[error(transparent)]
    Failed(#[from] ValidationFailure),

    /// A rule declaration was malformed
    #[error("Invalid rule specification: {0}")]
    InvalidRule(#[from] InvalidRuleError),
}
