//! CLI argument definitions for the question bank.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qbank",
    version,
    about = "Interview question bank - browse and validate the embedded corpus",
    long_about = "Browse an embedded corpus of interview-preparation topics.\n\n\
                  The corpus is validated when it is loaded at startup; lookups\n\
                  are by topic name and zero-based question index."
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
    /// List every topic in the corpus.
    Topics(TopicsArgs),

    /// Show all questions in one topic.
    Show(ShowArgs),

    /// Show a single question record.
    Question(QuestionArgs),

    /// Validate the corpus and print a machine-readable report.
    Doctor,
}

#[derive(Parser)]
pub struct TopicsArgs {
    /// Emit the topic list as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Topic name (e.g. "classes_and_objects").
    #[arg(value_name = "TOPIC")]
    pub topic: String,

    /// Emit the full collection as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct QuestionArgs {
    /// Topic name.
    #[arg(value_name = "TOPIC")]
    pub topic: String,

    /// Zero-based question index within the topic.
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Emit the record as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
