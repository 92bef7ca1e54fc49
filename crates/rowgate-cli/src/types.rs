use std::path::PathBuf;

use rowgate_model::FieldStats;

/// A validation run to execute.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Directory holding the JSON configuration and the input table.
    pub dir: PathBuf,
    /// Validate and summarize without writing the rejected-records file.
    pub dry_run: bool,
}

/// Everything the console summary needs about a finished run.
#[derive(Debug)]
pub struct RunOutcome {
    pub config_path: PathBuf,
    pub data_file: PathBuf,
    /// Written rejected-records file, absent on dry runs.
    pub rejected_file: Option<PathBuf>,
    pub total_records: usize,
    pub accepted_records: usize,
    pub rejected_records: usize,
    pub fields: Vec<FieldSummary>,
}

/// Per-field line of the summary table.
#[derive(Debug)]
pub struct FieldSummary {
    pub field: String,
    /// Human-readable list of the checks applied to the field.
    pub checks: String,
    pub stats: FieldStats,
}
