//! Per-field error aggregation.

use rowgate_model::{FieldStats, RuleSet, Verdict};

/// Fold verdicts into per-field failure stats.
///
/// One entry per ruled field, in rule-set declaration order. A record
/// counts once per field no matter how many of that field's rules it
/// violated. Formatting is the caller's concern.
pub fn summarize(verdicts: &[Verdict], rules: &RuleSet) -> Vec<(String, FieldStats)> {
    let total = verdicts.len();
    rules
        .fields()
        .map(|field| {
            let fail_count = verdicts
                .iter()
                .filter(|verdict| verdict.touches(field))
                .count();
            (field.to_string(), FieldStats::from_counts(fail_count, total))
        })
        .collect()
}
