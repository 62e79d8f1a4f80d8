//! Lanekit CLI - a two-lane project board in the terminal

use clap::Parser;
use lanekit::cli::{Cli, Commands};
use lanekit::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so the board owns stdout
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> lanekit::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Board { demo }) => lanekit::cli::commands::board::run(config_path, demo),
        Some(Commands::Check {
            title,
            description,
            people,
            json,
        }) => lanekit::cli::commands::check::run(config_path, &title, &description, &people, json),
        // No subcommand opens the board
        None => lanekit::cli::commands::board::run(config_path, false),
    }
}
