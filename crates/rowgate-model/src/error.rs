use thiserror::Error;

/// Configuration problems. Always fatal: a bad configuration means no
/// run occurs at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration key: {key}")]
    MissingKey { key: String },
    #[error(
        "field {field}: unrecognized type {kind:?} (expected int, string, date, or country_code)"
    )]
    UnknownType { field: String, kind: String },
    #[error("delimiter must be a single character, got {value:?}")]
    InvalidDelimiter { value: String },
}
