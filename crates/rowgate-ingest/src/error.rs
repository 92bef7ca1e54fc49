use std::path::PathBuf;

use thiserror::Error;

use rowgate_model::ConfigError;

/// Ingestion failures. Every variant is fatal: the run aborts before
/// any per-record validation.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no JSON configuration file found in {dir}")]
    ConfigNotFound { dir: PathBuf },
    #[error("expected exactly one JSON configuration file in {dir}, found {count}")]
    MultipleConfigs { dir: PathBuf, count: usize },
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid rule entry for field {field}: {source}")]
    InvalidFieldRule {
        field: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("failed to read table {path}: {source}")]
    TableRead { path: PathBuf, source: csv::Error },
}

pub type Result<T> = std::result::Result<T, IngestError>;
