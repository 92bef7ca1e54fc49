//! Declared-type checks for `int` and `string` fields.
//!
//! Cells were tagged at ingestion, so these checks reduce to matching
//! on the tag: an `int` field accepts only integer cells (no
//! fractional part, no non-numeric characters), and a `string` field
//! rejects cells that parsed as numbers.

use std::collections::BTreeSet;

use rowgate_model::CellValue;

pub fn check_int(cells: &[&CellValue]) -> BTreeSet<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| matches!(cell, CellValue::Text(_)))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn check_string(cells: &[&CellValue]) -> BTreeSet<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| matches!(cell, CellValue::Int { .. }))
        .map(|(idx, _)| idx)
        .collect()
}
