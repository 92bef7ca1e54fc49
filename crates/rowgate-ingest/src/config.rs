//! JSON run configuration loading.
//!
//! The configuration names the input file, its delimiter, and the
//! per-field rules (`data_valid`). Field declaration order in the JSON
//! is the reporting order, so `serde_json` runs with `preserve_order`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use rowgate_model::{ConfigError, ExpectedType, FieldRule, RuleSet, ValidationOptions};

use crate::error::{IngestError, Result};

/// A fully loaded and checked run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path of the input table, resolved relative to the config file.
    pub data_file: PathBuf,
    /// Field delimiter of the input table.
    pub delimiter: u8,
    pub rule_set: RuleSet,
    pub options: ValidationOptions,
}

/// Raw shape of the configuration file. All keys optional here;
/// required-key checks produce our own errors instead of serde's.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    route_file: Option<String>,
    delimiter: Option<String>,
    data_valid: Option<serde_json::Map<String, serde_json::Value>>,
    /// Optional run-wide override of the date format.
    date_format: Option<String>,
}

/// Raw per-field rule entry under `data_valid`.
#[derive(Debug, Default, Deserialize)]
struct FieldRuleSpec {
    #[serde(default)]
    none: bool,
    #[serde(default)]
    unique: bool,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Load and check a run configuration.
///
/// Fails on unreadable files, malformed JSON, missing required keys,
/// a multi-character delimiter, or a `type` value outside the
/// recognized vocabulary.
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| IngestError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let parsed: ConfigFile =
        serde_json::from_str(&raw).map_err(|e| IngestError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let route_file = parsed.route_file.ok_or_else(|| missing_key("route_file"))?;
    let delimiter = parsed.delimiter.ok_or_else(|| missing_key("delimiter"))?;
    let data_valid = parsed.data_valid.ok_or_else(|| missing_key("data_valid"))?;

    let delimiter = parse_delimiter(&delimiter)?;
    let rule_set = build_rule_set(data_valid)?;

    let mut options = ValidationOptions::default();
    if let Some(format) = parsed.date_format {
        options = options.with_date_format(format);
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let data_file = base.join(route_file);
    debug!(
        data_file = %data_file.display(),
        fields = rule_set.len(),
        "loaded run configuration"
    );

    Ok(RunConfig {
        data_file,
        delimiter,
        rule_set,
        options,
    })
}

fn missing_key(key: &str) -> IngestError {
    IngestError::Config(ConfigError::MissingKey {
        key: key.to_string(),
    })
}

fn parse_delimiter(value: &str) -> Result<u8> {
    let mut bytes = value.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(byte), None) => Ok(byte),
        _ => Err(IngestError::Config(ConfigError::InvalidDelimiter {
            value: value.to_string(),
        })),
    }
}

/// Turn the raw `data_valid` mapping into a checked rule set,
/// preserving declaration order.
fn build_rule_set(data_valid: serde_json::Map<String, serde_json::Value>) -> Result<RuleSet> {
    let mut entries = Vec::with_capacity(data_valid.len());
    for (field, value) in data_valid {
        let spec: FieldRuleSpec = serde_json::from_value(value).map_err(|e| {
            IngestError::InvalidFieldRule {
                field: field.clone(),
                source: e,
            }
        })?;
        let expected_type = match spec.kind {
            Some(kind) => Some(ExpectedType::parse(&kind).ok_or_else(|| {
                IngestError::Config(ConfigError::UnknownType {
                    field: field.clone(),
                    kind,
                })
            })?),
            None => None,
        };
        entries.push((
            field,
            FieldRule {
                require_non_null: spec.none,
                require_unique: spec.unique,
                expected_type,
            },
        ));
    }
    Ok(RuleSet::new(entries))
}
