use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cron_parser::{app, logging::init_logging};
use cron_parser_config::{AppConfig, LogFormat, LogLevel, OutputFormat};
use tracing::{info, warn};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "cron-parser")]
#[command(version)]
#[command(about = "Expands a cron expression into the values each field matches")]
#[command(
    long_about = "Expects \"MINUTE HOUR DAY_OF_MONTH MONTH DAY_OF_WEEK COMMAND\" as a single argument, e.g. \"*/15 0 1,15 * 1-5 /usr/bin/find\""
)]
struct Cli {
    /// Cron expression followed by the command
    expression: Option<String>,

    /// Ignored; only the first argument is parsed
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<LogLevel>,

    /// Log format (pretty, json)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())
            .with_context(|| format!("Failed to load configuration: {:?}", self.config))?;

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.print_config {
        print!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(&config.logging)?;
    if !cli.ignored.is_empty() {
        warn!(count = cli.ignored.len(), "ignoring extra arguments after the expression");
    }
    info!(format = %config.output.format, "parsing cron expression");

    let outcome = app::describe(cli.expression.as_deref(), &config.output)?;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
