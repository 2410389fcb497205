//! Symmetric-difference comparison with message-aware matching.
//!
//! Entries match on `(parameter, message)` only; the condition is kept out
//! of the match key so "the rule is entirely absent" and "the rule exists
//! but its boolean outcome differs" produce different report lines. Each
//! matched actual entry is consumed, so duplicate `(parameter, message)`
//! pairs in the expected set each require their own counterpart.

use rules_core::RuleSet;

/// Working triple for one evaluated rule during a comparison.
#[derive(Debug, Clone)]
struct Criterion {
    parameter: String,
    message: String,
    condition: bool,
}

impl Criterion {
    /// Match key: parameter and message, condition excluded.
    fn matches(&self, other: &Criterion) -> bool {
        self.parameter == other.parameter && self.message == other.message
    }
}

fn criteria_of(rules: &RuleSet) -> Vec<Criterion> {
    rules
        .entries()
        .map(|entry| Criterion {
            parameter: entry.parameter.clone(),
            message: entry.rule.message.clone(),
            condition: entry.rule.condition,
        })
        .collect()
}

/// Outcome of comparing an expected rule set against an actual one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// True iff the two sets matched exactly
    pub is_equal: bool,

    /// Newline-joined discrepancy lines; empty when equal
    pub report: String,
}

impl Comparison {
    fn equal() -> Self {
        Self {
            is_equal: true,
            report: String::new(),
        }
    }

    fn unequal(lines: Vec<String>) -> Self {
        Self {
            is_equal: false,
            report: lines.join("\n"),
        }
    }

    /// Returns an iterator over the report lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.report.lines()
    }
}

/// Compares rule evaluation sets without regard to entry order.
///
/// The report concatenates, in order: condition-mismatch lines, missing
/// lines (expected but absent), extra lines (present but unexpected).
/// When exactly one side is empty, a count-mismatch line precedes the
/// listing.
///
/// # Example
///
/// ```rust
/// use rules_compare::RuleSetComparator;
/// use rules_core::RuleSetBuilder;
///
/// let batch = RuleSetBuilder::new()
///     .rule("Id", false, "Id is required")
///     .build();
///
/// let comparison = RuleSetComparator::new().compare(&batch, &batch);
/// assert!(comparison.is_equal);
/// assert!(comparison.report.is_empty());
/// ```
pub struct RuleSetComparator;

impl RuleSetComparator {
    /// Creates a new comparator.
    pub fn new() -> Self {
        Self
    }

    /// Compares an expected rule set against an actual one.
    pub fn compare(&self, expected: &RuleSet, actual: &RuleSet) -> Comparison {
        if expected.is_empty() && actual.is_empty() {
            return Comparison::equal();
        }

        let mut lines = Vec::new();
        if expected.is_empty() || actual.is_empty() {
            lines.push(format!(
                "Expected {} rule(s), found {}",
                expected.len(),
                actual.len()
            ));
        }

        let expected_criteria = criteria_of(expected);
        let mut remaining = criteria_of(actual);

        let mut mismatches = Vec::new();
        let mut missing = Vec::new();

        for criterion in &expected_criteria {
            // First match in list order; matched entries are consumed so a
            // duplicate expected pair needs its own distinct counterpart.
            match remaining
                .iter()
                .position(|candidate| candidate.matches(criterion))
            {
                Some(position) => {
                    let found = remaining.remove(position);
                    if found.condition != criterion.condition {
                        mismatches.push(format!(
                            "Rule for parameter '{}' with message '{}': expected condition {}, found {}",
                            criterion.parameter,
                            criterion.message,
                            criterion.condition,
                            found.condition
                        ));
                    }
                }
                None => missing.push(format!(
                    "Missing rule for parameter '{}' with message '{}'",
                    criterion.parameter, criterion.message
                )),
            }
        }

        let extra = remaining.into_iter().map(|criterion| {
            format!(
                "Unexpected rule for parameter '{}' with message '{}'",
                criterion.parameter, criterion.message
            )
        });

        lines.extend(mismatches);
        lines.extend(missing);
        lines.extend(extra);

        if lines.is_empty() {
            Comparison::equal()
        } else {
            Comparison::unequal(lines)
        }
    }
}

impl Default for RuleSetComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rules_core::{RuleSet, RuleSetBuilder};

    fn compare(expected: &RuleSet, actual: &RuleSet) -> Comparison {
        RuleSetComparator::new().compare(expected, actual)
    }

    #[test]
    fn test_empty_sets_are_equal() {
        let comparison = compare(&RuleSet::empty(), &RuleSet::empty());
        assert!(comparison.is_equal);
        assert_eq!(comparison.report, "");
    }

    #[test]
    fn test_identical_sets_are_equal() {
        let batch = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .rule("Name", false, "Text is required")
            .build();

        let comparison = compare(&batch, &batch);
        assert!(comparison.is_equal);
        assert_eq!(comparison.report, "");
    }

    #[test]
    fn test_entry_order_is_ignored() {
        let expected = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .rule("Name", false, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Name", false, "Text is required")
            .rule("Id", true, "Id is invalid")
            .build();

        assert!(compare(&expected, &actual).is_equal);
    }

    #[test]
    fn test_flipped_condition_reports_mismatch() {
        let expected = RuleSetBuilder::new()
            .rule("Name", true, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Name", false, "Text is required")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.report,
            "Rule for parameter 'Name' with message 'Text is required': expected condition true, found false"
        );
    }

    #[test]
    fn test_missing_rule_reported() {
        let expected = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .rule("Name", true, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.report,
            "Missing rule for parameter 'Name' with message 'Text is required'"
        );
    }

    #[test]
    fn test_extra_rule_reported() {
        let expected = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .rule("Url", false, "Url is required")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.report,
            "Unexpected rule for parameter 'Url' with message 'Url is required'"
        );
    }

    #[test]
    fn test_expected_against_empty_actual_reports_count_and_missing() {
        let expected = RuleSetBuilder::new().rule("P1", true, "M1").build();
        let actual = RuleSet::empty();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.lines().collect::<Vec<_>>(),
            vec![
                "Expected 1 rule(s), found 0",
                "Missing rule for parameter 'P1' with message 'M1'",
            ]
        );
    }

    #[test]
    fn test_empty_expected_against_actual_reports_count_and_extra() {
        let expected = RuleSet::empty();
        let actual = RuleSetBuilder::new().rule("P1", false, "M1").build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.lines().collect::<Vec<_>>(),
            vec![
                "Expected 0 rule(s), found 1",
                "Unexpected rule for parameter 'P1' with message 'M1'",
            ]
        );
    }

    #[test]
    fn test_duplicate_expected_pairs_each_need_a_counterpart() {
        let expected = RuleSetBuilder::new()
            .rule("Name", true, "Text is required")
            .rule("Name", true, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Name", true, "Text is required")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.lines().collect::<Vec<_>>(),
            vec!["Missing rule for parameter 'Name' with message 'Text is required'"]
        );
    }

    #[test]
    fn test_duplicates_with_mixed_conditions_match_in_list_order() {
        // Expected conditions [true, false] against actual [false, true]:
        // the first expected entry consumes the first actual entry, so both
        // pairings report a mismatch rather than being re-paired to cancel
        // out.
        let expected = RuleSetBuilder::new()
            .rule("Name", true, "Text is required")
            .rule("Name", false, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Name", false, "Text is required")
            .rule("Name", true, "Text is required")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.lines().collect::<Vec<_>>(),
            vec![
                "Rule for parameter 'Name' with message 'Text is required': expected condition true, found false",
                "Rule for parameter 'Name' with message 'Text is required': expected condition false, found true",
            ]
        );
    }

    #[test]
    fn test_report_orders_mismatches_then_missing_then_extra() {
        let expected = RuleSetBuilder::new()
            .rule("Id", true, "Id is invalid")
            .rule("Name", true, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Id", false, "Id is invalid")
            .rule("Url", false, "Url is required")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.lines().collect::<Vec<_>>(),
            vec![
                "Rule for parameter 'Id' with message 'Id is invalid': expected condition true, found false",
                "Missing rule for parameter 'Name' with message 'Text is required'",
                "Unexpected rule for parameter 'Url' with message 'Url is required'",
            ]
        );
    }

    #[test]
    fn test_same_message_different_parameter_does_not_match() {
        let expected = RuleSetBuilder::new()
            .rule("Name", true, "Text is required")
            .build();
        let actual = RuleSetBuilder::new()
            .rule("Description", true, "Text is required")
            .build();

        let comparison = compare(&expected, &actual);
        assert!(!comparison.is_equal);
        assert_eq!(
            comparison.lines().collect::<Vec<_>>(),
            vec![
                "Missing rule for parameter 'Name' with message 'Text is required'",
                "Unexpected rule for parameter 'Description' with message 'Text is required'",
            ]
        );
    }
}
