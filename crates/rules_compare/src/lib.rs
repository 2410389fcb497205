//! # Rules Compare
//!
//! Structural comparison of rule evaluation sets. Test code builds two
//! batches — the rule outcomes a validator is expected to produce and the
//! outcomes it actually produced — and asks the comparator whether they
//! match, without caring about entry order.
//!
//! The comparator never raises: it always returns a verdict plus a
//! human-readable diff report, and the caller decides whether to fail a
//! test on it.
//!
//! ## Example
//!
//! ```rust
//! use rules_compare::RuleSetComparator;
//! use rules_core::RuleSetBuilder;
//!
//! let expected = RuleSetBuilder::new()
//!     .rule("Name", true, "Text is required")
//!     .build();
//! let actual = RuleSetBuilder::new()
//!     .rule("Name", false, "Text is required")
//!     .build();
//!
//! let comparison = RuleSetComparator::new().compare(&expected, &actual);
//! assert!(!comparison.is_equal);
//! assert!(comparison.report.contains("Name"));
//! ```

mod compare;

pub use compare::*;
