//! Delimited-text table reading.
//!
//! The whole table is loaded into memory before validation begins;
//! cells are reified into tagged [`CellValue`]s here so the checks
//! never touch raw strings.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use rowgate_model::{CellValue, Record, Table};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited table into memory.
///
/// The first row is the header; data records are numbered from source
/// line 2. Ragged records are padded with missing cells up to the
/// header width.
pub fn read_table(path: &Path, delimiter: u8) -> Result<Table> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::TableRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::TableRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut table = Table::new(headers);
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::TableRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut cells = Vec::with_capacity(table.columns.len());
        for col in 0..table.columns.len() {
            let raw = record.get(col).unwrap_or("");
            cells.push(CellValue::from_raw(raw));
        }
        // Header is line 1, first data record is line 2.
        table.push_record(Record::new(idx as u64 + 2, cells));
    }

    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        records = table.len(),
        "read input table"
    );
    Ok(table)
}
