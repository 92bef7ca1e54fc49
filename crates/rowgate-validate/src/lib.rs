//! The rowgate validation engine.
//!
//! One linear pass: the classifier runs every enabled check over every
//! ruled column, producing one verdict per record; the reporter folds
//! the same verdicts into per-field error rates. Record-level
//! violations are pure data and never abort a run.

pub mod checks;
mod classifier;
mod error;
mod reporter;

pub use classifier::{classify, partition, verify_columns};
pub use error::StructuralError;
pub use reporter::summarize;
