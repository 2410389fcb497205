//! # Rules Validator
//!
//! Batch rule evaluation engine. This crate provides the core evaluation
//! logic for business-rule batches:
//!
//! - Every rule in a batch is evaluated; there is no short-circuit on the
//!   first violation
//! - Violations accumulate per parameter, in evaluation order
//! - A single aggregated error is raised when at least one rule failed
//! - Malformed rule declarations surface as a distinct contract error
//!   instead of being folded into the validation outcome
//!
//! ## Example
//!
//! ```rust
//! use rules_core::RuleSetBuilder;
//! use rules_validator::{RuleValidator, ValidationError};
//!
//! let name = "";
//! let rules = RuleSetBuilder::new()
//!     .rule("Name", name.is_empty(), "Text is required")
//!     .build();
//!
//! let validator = RuleValidator::new();
//! let outcome = validator.validate("Account is invalid, fix the errors and try again.", &rules);
//!
//! match outcome {
//!     Err(ValidationError::Failed(failure)) => {
//!         assert_eq!(failure.messages_for("Name").unwrap(), ["Text is required"]);
//!     }
//!     other => panic!("expected an aggregated failure, got {:?}", other),
//! }
//! ```

mod engine;
mod error;

pub use engine::*;
pub use error::*;
