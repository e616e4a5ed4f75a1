//! Tournament ceremony script generator CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use toast_cli::config::load_config;
use toast_cli::logging::{LogConfig, LogFormat, init_logging};
use toast_cli::pipeline::{self, PipelineOptions};
use toast_model::{IssueSeverity, SeverityPolicy};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(has_errors) => i32::from(has_errors),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config_path = if cli.config.is_absolute() {
        cli.config.clone()
    } else {
        cli.tournament_dir.join(&cli.config)
    };
    let mut config = load_config(&config_path)?;
    if let Some(template) = &cli.template {
        config.template_file = template.clone();
    }
    if let Some(output) = &cli.output {
        config.output_file = output.clone();
    }
    let options = PipelineOptions {
        dry_run: cli.dry_run,
        policy: severity_policy_from_cli(cli),
    };
    let result = pipeline::run(&cli.tournament_dir, &config, &options)?;
    print_summary(&result);
    Ok(result.report.has_errors())
}

fn severity_policy_from_cli(cli: &Cli) -> SeverityPolicy {
    let mut policy = SeverityPolicy::default();
    if cli.strict_duplicates {
        policy.duplicate_award = IssueSeverity::Error;
    }
    if cli.strict_counts {
        policy.count_mismatch = IssueSeverity::Error;
    }
    policy
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
