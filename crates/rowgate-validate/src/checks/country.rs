//! Country-code membership check against the run's reference list.

use std::collections::BTreeSet;

use rowgate_model::{CellValue, ValidationOptions};

pub fn check(cells: &[&CellValue], options: &ValidationOptions) -> BTreeSet<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| {
            !cell.is_missing() && !options.is_valid_country_code(cell.render())
        })
        .map(|(idx, _)| idx)
        .collect()
}
