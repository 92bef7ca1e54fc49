//! Ingestion for rowgate: locating the run configuration, loading the
//! per-field rule set, and reading the delimited input table into
//! memory.

pub mod config;
pub mod csv_table;
pub mod discovery;
pub mod error;

pub use config::{RunConfig, load_config};
pub use csv_table::read_table;
pub use discovery::find_config_file;
pub use error::{IngestError, Result};
