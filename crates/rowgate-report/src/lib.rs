//! Output writing for rowgate: the rejected-records file.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use thiserror::Error;
use tracing::info;

use rowgate_model::{Record, Table};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write rejected records {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Path of the rejected-records file for a given input file:
/// `<stem>_rejected_records.csv` in the same directory.
pub fn rejected_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_rejected_records.csv"))
}

/// Write the rejected records, original columns and row order
/// preserved, using the run delimiter.
pub fn write_rejected_records(
    path: &Path,
    table: &Table,
    rejected: &[&Record],
    delimiter: u8,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    let write_err = |e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    writer.write_record(&table.columns).map_err(write_err)?;
    for record in rejected {
        let row: Vec<&str> = (0..table.columns.len())
            .map(|idx| {
                record
                    .cells
                    .get(idx)
                    .map(|cell| cell.render())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row).map_err(write_err)?;
    }
    writer.flush().map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    info!(path = %path.display(), records = rejected.len(), "wrote rejected records");
    Ok(())
}
