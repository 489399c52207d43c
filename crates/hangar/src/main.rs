//! Game Hangar CLI - site front for the Godot game server.
//!
//! Provides commands for:
//! - `serve`: Start the site front server
//! - `routes`: Show the rendering mode and headers applied to request paths

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RoutesArgs, ServeArgs};
use output::{Output, Tone};

/// Game Hangar - site front for browser-playable Godot games.
#[derive(Parser)]
#[command(name = "hangar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the site front server.
    Serve(ServeArgs),
    /// Resolve route rules for request paths.
    Routes(RoutesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::stderr();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute()),
            Err(err) => Err(error::CliError::Server(format!(
                "Failed to create tokio runtime: {err}"
            ))),
        },
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.line(Tone::Error, &format!("Error: {err}"));
        std::process::exit(1);
    }
}
