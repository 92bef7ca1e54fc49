//! The run pipeline: discover config, load rules, read the table,
//! classify, partition, write rejected records, and aggregate stats.
//!
//! A single linear pass. Fatal problems (bad config, missing columns,
//! unreadable input) abort immediately; record-level violations are
//! data and never abort.

use anyhow::{Context, Result};
use tracing::info;

use rowgate_ingest::{find_config_file, load_config, read_table};
use rowgate_validate::{classify, partition, summarize, verify_columns};

use crate::types::{FieldSummary, RunOutcome, RunRequest};

pub fn run(request: &RunRequest) -> Result<RunOutcome> {
    let config_path = find_config_file(&request.dir)?;
    info!(config = %config_path.display(), "loading configuration");
    let config = load_config(&config_path)?;

    info!(input = %config.data_file.display(), "reading input table");
    let table = read_table(&config.data_file, config.delimiter)?;

    verify_columns(&table, &config.rule_set)
        .with_context(|| format!("validating {}", config.data_file.display()))?;

    let verdicts = classify(&table, &config.rule_set, &config.options);
    let (accepted, rejected) = partition(&table, &verdicts);
    info!(
        total = table.len(),
        accepted = accepted.len(),
        rejected = rejected.len(),
        "classified records"
    );

    let rejected_file = if request.dry_run {
        None
    } else {
        let path = rowgate_report::rejected_path(&config.data_file);
        rowgate_report::write_rejected_records(&path, &table, &rejected, config.delimiter)?;
        Some(path)
    };

    let stats = summarize(&verdicts, &config.rule_set);
    let fields = stats
        .into_iter()
        .map(|(field, stats)| {
            let checks = config
                .rule_set
                .rule_for(&field)
                .map(|rule| {
                    rule.kinds()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            FieldSummary {
                field,
                checks,
                stats,
            }
        })
        .collect();

    Ok(RunOutcome {
        config_path,
        data_file: config.data_file,
        rejected_file,
        total_records: table.len(),
        accepted_records: accepted.len(),
        rejected_records: rejected.len(),
        fields,
    })
}
