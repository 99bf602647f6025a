//! studio-metrics
//!
//! Command-line front end for the studio health-metric calculators.
//!
//! ## Flow
//!
//! - Load `.env`, parse arguments, load layered configuration
//! - Initialize tracing (stderr)
//! - Dispatch the subcommand; results go to stdout

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use studio_metrics_cli::{args::Cli, commands, config::AppConfig, error::CliError, logging};
use tracing::debug;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(studio_metrics_cli::error::EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load()?;
    logging::init_tracing(&config.logging, cli.global.verbose);

    let format = cli.global.format.unwrap_or(config.output.format);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        ?format,
        "Starting studio-metrics"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, format, &config, &mut out)?;
    out.flush()?;
    Ok(())
}
