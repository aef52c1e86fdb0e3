//! Operator tool for the portal guard.
//!
//! Works on a guard data directory (`config.toml`, `world.toml`, `lang/`)
//! without a running game server.
//! Run with: `portal-cli [--data-dir DIR] <command>`

mod args;
mod commands;
mod dirs;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Check, GenerateWorldConfig, Resolve};

/// Inspect and prepare portal guard data
#[derive(Parser)]
#[command(name = "portal-cli")]
#[command(about = "Operator tools for the portal guard", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (defaults to $PORTAL_GUARD_DATA_DIR, then the platform location)
    #[arg(short, long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Add missing worlds to world.toml
    GenerateWorldConfig(GenerateWorldConfig),

    /// Print the effective radius for a world
    Resolve(Resolve),

    /// Evaluate a simulated portal creation or trip
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PORTAL_GUARD_DATA_DIR)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = dirs::resolve_data_dir(cli.data_dir);
    tracing::debug!("Using data directory {}", data_dir.display());

    match cli.command {
        Command::GenerateWorldConfig(cmd) => cmd.execute(&data_dir),
        Command::Resolve(cmd) => cmd.execute(&data_dir),
        Command::Check(cmd) => cmd.execute(&data_dir),
    }
}
