//! Batch evaluation engine.
//!
//! The engine walks an ordered batch of rule entries, records every
//! violation against its parameter, and raises one aggregated error after
//! the full pass. Evaluating the whole batch before raising surfaces the
//! complete set of problems with an input in one round-trip.

use rules_core::{InvalidRuleError, RuleSet, ValidationFailure};
use tracing::debug;

use crate::ValidationError;

/// Evaluates rule batches and aggregates violations per parameter.
///
/// The validator is stateless; each call operates on its own freshly
/// constructed failure, so concurrent use needs no coordination.
///
/// # Example
///
/// ```rust
/// use rules_core::RuleSetBuilder;
/// use rules_validator::RuleValidator;
///
/// let rules = RuleSetBuilder::new()
///     .rule("Id", false, "Id is required")
///     .rule("Name", false, "Text is required")
///     .build();
///
/// let validator = RuleValidator::new();
/// assert!(validator.validate("Account is invalid.", &rules).is_ok());
/// ```
pub struct RuleValidator;

impl RuleValidator {
    /// Creates a new rule validator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a batch and raises a [`ValidationError`] if any rule is
    /// violated.
    ///
    /// `message` becomes the top-level message of the aggregated failure.
    /// An empty batch returns `Ok(())`. A malformed entry (empty parameter
    /// or empty message) or an empty `message` stops evaluation
    /// immediately with [`ValidationError::InvalidRule`].
    pub fn validate(
        &self,
        message: impl Into<String>,
        rules: &RuleSet,
    ) -> Result<(), ValidationError> {
        self.validate_as::<ValidationError>(message, rules)
    }

    /// Evaluates a batch, raising the caller's own error type.
    ///
    /// The concrete error is selected at compile time through the `From`
    /// bounds: violated rules convert from [`ValidationFailure`], malformed
    /// declarations from [`InvalidRuleError`]. Domain services use this to
    /// surface their own tagged error enums without wrapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rules_core::{InvalidRuleError, RuleSetBuilder, ValidationFailure};
    /// use rules_validator::RuleValidator;
    /// use thiserror::Error;
    ///
    /// #[derive(Debug, Error)]
    /// enum SourceError {
    ///     #[error(transparent)]
    ///     Invalid(#[from] ValidationFailure),
    ///     #[error(transparent)]
    ///     BrokenRule(#[from] InvalidRuleError),
    /// }
    ///
    /// let rules = RuleSetBuilder::new()
    ///     .rule("Name", true, "Text is required")
    ///     .build();
    ///
    /// let validator = RuleValidator::new();
    /// let outcome: Result<(), SourceError> =
    ///     validator.validate_as("Source is invalid.", &rules);
    /// assert!(matches!(outcome, Err(SourceError::Invalid(_))));
    /// ```
    pub fn validate_as<E>(&self, message: impl Into<String>, rules: &RuleSet) -> Result<(), E>
    where
        E: From<ValidationFailure> + From<InvalidRuleError>,
    {
        let message = message.into();
        if message.is_empty() {
            return Err(InvalidRuleError::EmptyFailureMessage.into());
        }

        debug!(rules = rules.len(), "evaluating rule batch");

        let mut failure = ValidationFailure::new(message);
        for (index, entry) in rules.entries().enumerate() {
            entry.ensure_well_formed(index)?;
            if entry.rule.condition {
                failure.add(entry.parameter.clone(), entry.rule.message.clone());
            }
        }

        if failure.is_empty() {
            Ok(())
        } else {
            debug!(
                violations = failure.violation_count(),
                parameters = failure.parameter_count(),
                "rule batch produced violations"
            );
            Err(failure.into())
        }
    }
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new()
    }
}
