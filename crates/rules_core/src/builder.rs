//! Builder pattern for assembling rule sets.
//!
//! Per-entity validators typically evaluate their predicates inline while
//! declaring the batch; the builder keeps that declaration fluent.

use crate::{Rule, RuleEntry, RuleSet};

/// Builder for creating a `RuleSet`.
///
/// # Example
///
/// ```rust
/// use rules_core::RuleSetBuilder;
///
/// let name = "";
/// let url = "https://example.org/feed";
///
/// let rules = RuleSetBuilder::new()
///     .rule("Name", name.is_empty(), "Text is required")
///     .rule("Url", url.is_empty(), "Url is required")
///     .build();
///
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    entries: Vec<RuleEntry>,
}

impl RuleSetBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule from an evaluated condition and its violation message.
    pub fn rule(
        mut self,
        parameter: impl Into<String>,
        condition: bool,
        message: impl Into<String>,
    ) -> Self {
        self.entries
            .push(RuleEntry::new(parameter, Rule::new(condition, message)));
        self
    }

    /// Adds a pre-built entry.
    pub fn entry(mut self, entry: RuleEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Adds multiple pre-built entries.
    pub fn entries(mut self, entries: Vec<RuleEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Builds the rule set.
    pub fn build(self) -> RuleSet {
        RuleSet::from_entries(self.entries)
    }
}
