//! Error types for rule validation.
//!
//! Two failure modes exist and are deliberately kept apart:
//!
//! - [`ValidationFailure`]: the expected outcome when business rules are
//!   violated; carries structured per-parameter detail for the caller to
//!   translate into a user-facing response
//! - [`InvalidRuleError`]: a malformed rule declaration, which signals a
//!   bug in the calling validator and must not be absorbed by business
//!   error handling

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a rule entry itself is malformed.
///
/// Raising this instead of a [`ValidationFailure`] prevents silently
/// swallowing broken rule declarations as if they were ordinary
/// validation outcomes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRuleError {
    /// Entry has an empty parameter name
    #[error("Rule entry {index} has an empty parameter name")]
    EmptyParameter {
        /// Position of the entry within its batch
        index: usize,
    },

    /// Entry has an empty violation message
    #[error("Rule entry {index} for parameter '{parameter}' has an empty message")]
    EmptyMessage {
        /// Position of the entry within its batch
        index: usize,
        /// Parameter the entry constrains
        parameter: String,
    },

    /// The top-level failure message is empty
    #[error("Validation failure message must not be empty")]
    EmptyFailureMessage,
}

/// Aggregated validation error collecting every violated rule, grouped by
/// parameter.
///
/// The failure starts empty, is filled in as rules are evaluated, and is
/// only raised if at least one violation was recorded. Message order
/// within a parameter follows evaluation order, and duplicate messages
/// are preserved rather than deduplicated.
///
/// `Display` renders the top-level message only; downstream layers query
/// the per-parameter detail through [`messages_for`](Self::messages_for)
/// and [`violations`](Self::violations) to build per-field responses.
///
/// # Example
///
/// ```rust
/// use rules_core::ValidationFailure;
///
/// let mut failure = ValidationFailure::new("Source is invalid, fix the errors and try again.");
/// failure.add("Name", "Text is required");
/// failure.add("Name", "Text exceeds 255 characters");
///
/// assert_eq!(failure.violation_count(), 2);
/// assert_eq!(failure.messages_for("Name").unwrap().len(), 2);
/// assert_eq!(failure.messages_for("Url"), None);
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationFailure {
    /// Top-level description of the overall failure category
    message: String,

    /// Violation messages grouped by parameter, in insertion order
    violations: IndexMap<String, Vec<String>>,
}

impl ValidationFailure {
    /// Creates an empty failure carrying the top-level message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            violations: IndexMap::new(),
        }
    }

    /// Returns the top-level failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Records a violation message against a parameter.
    ///
    /// The parameter's message list is created on first sight; subsequent
    /// messages append in order, duplicates included.
    pub fn add(&mut self, parameter: impl Into<String>, message: impl Into<String>) {
        self.violations
            .entry(parameter.into())
            .or_default()
            .push(message.into());
    }

    /// Returns true if no violation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of parameters with at least one violation.
    pub fn parameter_count(&self) -> usize {
        self.violations.len()
    }

    /// Returns the total number of recorded violation messages.
    pub fn violation_count(&self) -> usize {
        self.violations.values().map(Vec::len).sum()
    }

    /// Returns an iterator over the violated parameters, in insertion order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.violations.keys().map(String::as_str)
    }

    /// Returns the ordered violation messages for a parameter, if any.
    pub fn messages_for(&self, parameter: &str) -> Option<&[String]> {
        self.violations.get(parameter).map(Vec::as_slice)
    }

    /// Returns an iterator over `(parameter, messages)` pairs, in
    /// insertion order.
    pub fn violations(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.violations
            .iter()
            .map(|(parameter, messages)| (parameter.as_str(), messages.as_slice()))
    }

    /// Renders the failure as a multi-line report for logging.
    ///
    /// The first line is the top-level message; each subsequent line lists
    /// one parameter with its messages in evaluation order.
    pub fn describe(&self) -> String {
        let mut lines = vec![self.message.clone()];
        for (parameter, messages) in &self.violations {
            lines.push(format!("  {}: {}", parameter, messages.join("; ")));
        }
        lines.join("\n")
    }
}
