//! CLI argument definitions for the ceremony toolkit.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "toast",
    version,
    about = "Tournament ceremony script generator",
    long_about = "Generate an award ceremony script for a robotics tournament.\n\n\
                  Validates scoring and rubric exports, resolves award winners\n\
                  from ranks and judge selections, and renders the ceremony\n\
                  script from an HTML template."
)]
pub struct Cli {
    /// Tournament folder containing the configuration and division data.
    #[arg(value_name = "TOURNAMENT_DIR")]
    pub tournament_dir: PathBuf,

    /// Configuration file, relative to the tournament folder.
    #[arg(long = "config", value_name = "FILE", default_value = "tournament.json")]
    pub config: PathBuf,

    /// Template file override (default comes from the configuration).
    #[arg(long = "template", value_name = "FILE")]
    pub template: Option<String>,

    /// Output file override (default comes from the configuration).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Validate and resolve without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Treat duplicate award selections as errors instead of warnings.
    #[arg(long = "strict-duplicates")]
    pub strict_duplicates: bool,

    /// Treat tournament award count mismatches as errors instead of warnings.
    #[arg(long = "strict-counts")]
    pub strict_counts: bool,

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
