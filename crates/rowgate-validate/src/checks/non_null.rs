//! Non-null check: every record must have a value for the field.

use std::collections::BTreeSet;

use rowgate_model::CellValue;

pub fn check(cells: &[&CellValue]) -> BTreeSet<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_missing())
        .map(|(idx, _)| idx)
        .collect()
}
