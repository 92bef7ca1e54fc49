//! Field checks.
//!
//! Each check is a pure function over one field's full column of
//! cells, returning the set of failing record indices. Missing cells
//! only ever fail the non-null check: a value a record does not have
//! cannot violate a type or uniqueness constraint, so a blank cell is
//! never double-counted.

mod country;
mod datatype;
mod dates;
mod non_null;
mod unique;

use std::collections::BTreeSet;

use rowgate_model::{CellValue, ExpectedType, RuleKind, ValidationOptions};

/// Run one check against a full column.
pub fn failing_indices(
    kind: RuleKind,
    cells: &[&CellValue],
    options: &ValidationOptions,
) -> BTreeSet<usize> {
    match kind {
        RuleKind::NonNull => non_null::check(cells),
        RuleKind::Unique => unique::check(cells),
        RuleKind::Type(ExpectedType::Int) => datatype::check_int(cells),
        RuleKind::Type(ExpectedType::Str) => datatype::check_string(cells),
        RuleKind::Type(ExpectedType::Date) => dates::check(cells, &options.date_format),
        RuleKind::Type(ExpectedType::CountryCode) => country::check(cells, options),
    }
}
