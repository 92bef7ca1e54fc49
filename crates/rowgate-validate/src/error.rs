use thiserror::Error;

/// The input table does not have the shape the rule set requires.
/// Fatal; raised before any per-record validation.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("input table is missing declared column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}
