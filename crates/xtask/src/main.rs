//! Development tasks for the dynamic rate addon
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Simulate, TailLogs};

/// Development tasks for the dynamic rate addon
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the dynamic rate addon", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load an addon config and print the resulting rate snapshot
    Check(Check),

    /// Run one experience award through the rate policy
    Simulate(Simulate),

    /// Monitor the addon log file in real-time
    TailLogs(TailLogs),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
        Command::TailLogs(cmd) => cmd.execute(),
    }
}
