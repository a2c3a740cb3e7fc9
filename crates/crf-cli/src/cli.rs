//! CLI argument definitions for the form validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crf-validate",
    version,
    about = "Validate caregiver relationship and father involvement form submissions",
    long_about = "Validate a relationship and father involvement case report form \
                  submission against its conditional rules.\n\n\
                  Facts held in other study records (HIV status, enrollment schedule, \
                  child consent, delivery) are read from a study context JSON file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Validate one submission.
    Validate(ValidateArgs),

    /// List the questionnaire fields and their kinds.
    Fields,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the submission JSON.
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Path to the study context JSON.
    #[arg(long = "study", value_name = "JSON")]
    pub study: PathBuf,

    /// Report every violated rule instead of stopping at the first.
    #[arg(long = "collect")]
    pub collect: bool,

    /// Enable the legacy positive-mother disclosure rule.
    ///
    /// Requires the partner disclosure answer when the mother is HIV
    /// positive, and its follow-up question once answered.
    #[arg(long = "positive-mother-disclosure")]
    pub positive_mother_disclosure: bool,

    /// Output format for the result.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
