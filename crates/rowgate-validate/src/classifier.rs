//! Record classification.

use tracing::debug;

use rowgate_model::{Record, RuleSet, Table, ValidationOptions, Verdict, Violation};

use crate::checks;
use crate::error::StructuralError;

/// Check that every field named in the rule set is a table column.
///
/// Must pass before [`classify`] runs; a missing column is a fatal
/// structural problem, not a per-record failure.
pub fn verify_columns(table: &Table, rules: &RuleSet) -> Result<(), StructuralError> {
    let missing: Vec<String> = rules
        .fields()
        .filter(|field| table.column_index(field).is_none())
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StructuralError::MissingColumns { columns: missing })
    }
}

/// Run every enabled check over every ruled column.
///
/// Returns one verdict per record, positionally aligned with
/// `table.records`. Pure: same inputs, same verdicts; nothing is
/// reordered or dropped.
pub fn classify(table: &Table, rules: &RuleSet, options: &ValidationOptions) -> Vec<Verdict> {
    let mut verdicts = vec![Verdict::default(); table.len()];

    for (field, rule) in rules.iter() {
        let Some(column) = table.column_index(field) else {
            // verify_columns rejects this shape up front; fields that
            // still slip through are left unchecked.
            continue;
        };
        let cells = table.column(column);
        for kind in rule.kinds() {
            let failing = checks::failing_indices(kind, &cells, options);
            if !failing.is_empty() {
                debug!(field, rule = %kind, failures = failing.len(), "check failures");
            }
            for idx in failing {
                verdicts[idx].add(Violation::new(field, kind));
            }
        }
    }

    verdicts
}

/// Split a table's records into accepted and rejected subsequences,
/// preserving original order within each.
pub fn partition<'t>(table: &'t Table, verdicts: &[Verdict]) -> (Vec<&'t Record>, Vec<&'t Record>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for (record, verdict) in table.records.iter().zip(verdicts) {
        if verdict.is_valid() {
            accepted.push(record);
        } else {
            rejected.push(record);
        }
    }
    (accepted, rejected)
}
