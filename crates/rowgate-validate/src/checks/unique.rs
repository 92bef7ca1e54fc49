//! Uniqueness check.
//!
//! Duplication is a property of the whole column, so every member of a
//! duplicate group is flagged, not just the repeats after the first
//! occurrence. Missing cells are exempt. Cells are grouped by their
//! source lexeme, so `007` and `7` stay distinct.

use std::collections::{BTreeMap, BTreeSet};

use rowgate_model::CellValue;

pub fn check(cells: &[&CellValue]) -> BTreeSet<usize> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, cell) in cells.iter().enumerate() {
        if cell.is_missing() {
            continue;
        }
        groups.entry(cell.render()).or_default().push(idx);
    }

    groups
        .into_values()
        .filter(|indices| indices.len() > 1)
        .flatten()
        .collect()
}
