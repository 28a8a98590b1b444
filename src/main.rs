//! TouchDeck - Touchscreen hit-test and screen-dispatch engine
//!
//! Headless front end for the engine: validate and inspect screen manifests,
//! and drive the dispatch engine from scripted touch events.

use clap::{Parser, Subcommand};
use touchdeck::cli::{InspectArgs, SimulateArgs, ValidateArgs};
use touchdeck::constants::APP_NAME;
use tracing_subscriber::EnvFilter;

/// TouchDeck - Touchscreen hit-test and screen-dispatch engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a screen manifest for errors and warnings
    Validate(ValidateArgs),
    /// Show the resources a manifest declares
    Inspect(InspectArgs),
    /// Run a touch script against a manifest
    Simulate(SimulateArgs),
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Simulate(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{APP_NAME}: {}", error.message);
            error.code.into()
        }
    }
}
