//! BreachCheck command-line entry point.
//!
//! Thin shell that parses arguments, loads configuration and hands off to
//! the command handlers. Every failure is printed to stderr and exits 1.

mod cli;
mod commands;
mod display;

use breachcheck_core::load_dotenv;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use commands::Options;
use display::print_error;
use std::process::ExitCode;
use tracing::info;

/// Initialize tracing subscriber for logging. Logs go to stderr so reports
/// and JSON on stdout stay clean.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose {
        "warn,breachcheck=debug,breachcheck_core=debug,breachcheck_hibp=debug,breachcheck_breaches=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli, command: Commands) -> anyhow::Result<()> {
    let opts = Options {
        config_path: cli.config,
        json: cli.json,
        api_url: cli.api_url,
    };

    match command {
        Commands::Check {
            email,
            truncate,
            summary,
            mask,
        } => commands::check(&opts, &email, truncate, summary, mask).await,
        Commands::Breach { name } => commands::breach(&opts, &name).await,
        Commands::Catalog { limit } => commands::catalog(&opts, limit).await,
        Commands::Init => commands::init(&opts.config_path),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.take() else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    load_dotenv();
    info!("Starting BreachCheck v{}", env!("CARGO_PKG_VERSION"));

    match run(cli, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
