//! CLI argument definitions for rowgate.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowgate",
    version,
    about = "Validate tabular records against a declarative per-field rule set",
    long_about = "Validate a delimited table against the per-field rules declared in a\n\
                  JSON configuration, split records into accepted and rejected, and\n\
                  report per-field error rates.\n\n\
                  The run directory must contain exactly one JSON configuration file\n\
                  naming the input table (route_file), its delimiter, and the rules\n\
                  (data_valid)."
)]
pub struct Cli {
    /// Directory containing the JSON configuration and the input table.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Validate and report without writing the rejected-records file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
