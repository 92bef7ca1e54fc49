//! Configuration discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Locate the JSON configuration file in a run directory.
///
/// The directory must contain exactly one `*.json` file; zero or
/// several is a fatal configuration problem.
pub fn find_config_file(dir: &Path) -> Result<PathBuf> {
    let mut candidates = list_json_files(dir)?;
    match candidates.len() {
        0 => Err(IngestError::ConfigNotFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        count => Err(IngestError::MultipleConfigs {
            dir: dir.to_path_buf(),
            count,
        }),
    }
}

/// Lists all JSON files in a directory, sorted by filename.
fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
