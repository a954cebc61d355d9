//! sim_tui - Command line runner and terminal viewer for sim_core

mod app;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use commands::{Batch, Run, View};

/// Hero build combat simulator
#[derive(Parser)]
#[command(name = "sim_tui")]
#[command(about = "Simulate hero builds in sustained combat", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run one simulation and print the result as JSON
    Run(Run),

    /// Run a Monte Carlo batch with rolled crits
    Batch(Batch),

    /// Open the interactive results viewer
    View(View),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => {
            init_tracing();
            cmd.execute()
        }
        Command::Batch(cmd) => {
            init_tracing();
            cmd.execute()
        }
        // Log output would tear the alternate screen
        Command::View(cmd) => cmd.execute(),
    }
}
