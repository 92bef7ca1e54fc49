#![deny(unsafe_code)]

use std::collections::BTreeSet;

use crate::RuleKind;

/// One rule failure on one record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Violation {
    pub field: String,
    pub rule: RuleKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, rule: RuleKind) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

/// The accept/reject outcome for one record.
///
/// A record with an empty violation set is valid. Verdicts are pure
/// data: record-level failures never abort a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Verdict {
    pub violations: BTreeSet<Violation>,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.insert(violation);
    }

    /// Whether any violation touches the given field.
    pub fn touches(&self, field: &str) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field)
    }
}

/// Aggregated failure counts for one field.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldStats {
    pub total_checked: usize,
    pub fail_count: usize,
    pub fail_percentage: f64,
}

impl FieldStats {
    /// Build stats from a failure count over a record total.
    ///
    /// The percentage is rounded to 4 decimal places; an empty table
    /// reports 0%.
    pub fn from_counts(fail_count: usize, total_checked: usize) -> Self {
        let fail_percentage = if total_checked == 0 {
            0.0
        } else {
            let raw = fail_count as f64 / total_checked as f64 * 100.0;
            (raw * 10_000.0).round() / 10_000.0
        };
        Self {
            total_checked,
            fail_count,
            fail_percentage,
        }
    }
}
