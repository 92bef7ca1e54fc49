//! Date format check.
//!
//! One format string per run (see `ValidationOptions`); a cell passes
//! only if it parses under that exact format.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use rowgate_model::CellValue;

pub fn check(cells: &[&CellValue], format: &str) -> BTreeSet<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_missing() && !matches_format(cell.render(), format))
        .map(|(idx, _)| idx)
        .collect()
}

/// True when the value parses under the format.
///
/// Date-only formats go through `NaiveDate`, formats with time
/// components through `NaiveDateTime`; trying both covers either
/// shape without inspecting the format string.
fn matches_format(value: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveDate::parse_from_str(value, format).is_ok()
}
