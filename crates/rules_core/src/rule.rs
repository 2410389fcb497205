//! Rule types shared by the validation engine and the comparator.
//!
//! This module contains the evaluated-rule shape and the ordered batch
//! submitted to the engine. Rules are produced fresh per validation call;
//! nothing here holds shared mutable state.

use serde::{Deserialize, Serialize};

use crate::InvalidRuleError;

/// A single evaluated business rule.
///
/// `condition == true` means the rule is violated and `message` should be
/// filed against the parameter the rule constrains. The predicate that
/// produced the condition stays with the calling validator; the engine
/// only consumes the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Whether the rule is violated
    pub condition: bool,

    /// Message reported when the rule is violated
    pub message: String,
}

impl Rule {
    /// Creates a rule from an evaluated condition and its violation message.
    pub fn new(condition: bool, message: impl Into<String>) -> Self {
        Self {
            condition,
            message: message.into(),
        }
    }
}

/// A rule bound to the parameter (field name) it constrains.
///
/// Parameters are not required to be unique within a batch: several rules
/// may target the same parameter and each contributes its own message when
/// violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// The evaluated rule
    pub rule: Rule,

    /// The field or attribute the rule constrains
    pub parameter: String,
}

impl RuleEntry {
    /// Creates an entry binding a rule to the parameter it constrains.
    pub fn new(parameter: impl Into<String>, rule: Rule) -> Self {
        Self {
            rule,
            parameter: parameter.into(),
        }
    }

    /// Checks that the entry is usable by the engine.
    ///
    /// An entry with an empty parameter name or an empty message is a bug
    /// in the calling validator, not a validation outcome. `index` is the
    /// entry's position within its batch, carried in the error for
    /// diagnostics.
    pub fn ensure_well_formed(&self, index: usize) -> Result<(), InvalidRuleError> {
        if self.parameter.is_empty() {
            return Err(InvalidRuleError::EmptyParameter { index });
        }
        if self.rule.message.is_empty() {
            return Err(InvalidRuleError::EmptyMessage {
                index,
                parameter: self.parameter.clone(),
            });
        }
        Ok(())
    }
}

/// An ordered batch of rule entries submitted together.
///
/// Entry order matters only for deterministic message ordering within a
/// parameter, not for correctness.
///
/// # Example
///
/// ```rust
/// use rules_core::{Rule, RuleEntry, RuleSet};
///
/// let mut rules = RuleSet::empty();
/// rules.add(RuleEntry::new("Id", Rule::new(false, "Id is required")));
/// assert_eq!(rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// The rule entries, in submission order
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    /// Creates a new empty rule set.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a rule set from a list of entries.
    pub fn from_entries(entries: Vec<RuleEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in submission order.
    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter()
    }

    /// Gets a specific entry by position.
    pub fn get(&self, index: usize) -> Option<&RuleEntry> {
        self.entries.get(index)
    }

    /// Appends an entry to the set.
    pub fn add(&mut self, entry: RuleEntry) {
        self.entries.push(entry);
    }
}

impl From<Vec<RuleEntry>> for RuleSet {
    fn from(entries: Vec<RuleEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleEntry;
    type IntoIter = std::vec::IntoIter<RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleEntry;
    type IntoIter = std::slice::Iter<'a, RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<RuleEntry> for RuleSet {
    fn from_iter<T: IntoIterator<Item = RuleEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<RuleEntry> for RuleSet {
    fn extend<T: IntoIterator<Item = RuleEntry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
