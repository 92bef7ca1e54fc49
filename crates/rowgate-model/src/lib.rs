pub mod error;
pub mod options;
pub mod rules;
pub mod table;
pub mod value;
pub mod verdict;

pub use error::ConfigError;
pub use options::{DEFAULT_DATE_FORMAT, ValidationOptions};
pub use rules::{ExpectedType, FieldRule, RuleKind, RuleSet};
pub use table::{Record, Table};
pub use value::CellValue;
pub use verdict::{FieldStats, Verdict, Violation};
