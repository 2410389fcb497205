//! # Rules Core
//!
//! Core data shapes and error types for the Rule Validation Engine.
//!
//! This crate provides the building blocks shared by the validation engine
//! and the rule-set comparator. A business rule is an opaque boolean outcome
//! paired with a violation message; the engine and the comparator never see
//! the predicate that produced the outcome, only the evaluated result and
//! the parameter (field name) it constrains.
//!
//! ## Key Concepts
//!
//! - **Rule**: an evaluated condition plus the message reported on violation
//! - **RuleEntry**: a rule bound to the parameter it constrains
//! - **RuleSet**: an ordered batch of entries submitted together
//! - **ValidationFailure**: the aggregated error collecting every violated
//!   rule, grouped by parameter
//!
//! ## Example
//!
//! ```rust
//! use rules_core::{RuleSetBuilder, ValidationFailure};
//!
//! let name = "";
//! let rules = RuleSetBuilder::new()
//!     .rule("Name", name.is_empty(), "Text is required")
//!     .rule("Name", name.len() > 255, "Text exceeds 255 characters")
//!     .build();
//!
//! assert_eq!(rules.len(), 2);
//!
//! let mut failure = ValidationFailure::new("Account is invalid, fix the errors and try again.");
//! for entry in rules.entries() {
//!     if entry.rule.condition {
//!         failure.add(&entry.parameter, &entry.rule.message);
//!     }
//! }
//!
//! assert_eq!(failure.messages_for("Name"), Some(&["Text is required".to_string()][..]));
//! ```

pub mod builder;
pub mod error;
pub mod rule;

pub use builder::*;
pub use error::*;
pub use rule::*;
