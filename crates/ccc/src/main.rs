//! CCC CLI - Catechism reader.
//!
//! Provides commands for:
//! - `render`: Render one page by slug
//! - `check`: Verify the derived page indices of a store
//! - `routes`: List page paths in reading order

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs, RoutesArgs};
use output::Output;

/// CCC - Catechism reader.
#[derive(Parser)]
#[command(name = "ccc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page to standard output.
    Render(RenderArgs),
    /// Check the store and its derived indices.
    Check(CheckArgs),
    /// List page paths in reading order.
    Routes(RoutesArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.store.verbose,
            Self::Check(args) => args.store.verbose,
            Self::Routes(args) => args.store.verbose,
        }
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
