//! Hotseat - Unified CLI
//!
//! Two players, one terminal.

use anyhow::{Context, Result};
use clap::Parser;
use hotseat::{Cli, Command, HotseatConfig, Replay};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let theme = config.theme()?;

    match cli.command() {
        Command::Play => {
            hotseat::init_file_logging(&config)?;
            hotseat::run_tui(theme)
        }
        Command::Replay { moves, json } => {
            hotseat::init_stderr_logging(&config);
            info!(move_count = moves.len(), "Replaying moves");
            let replay = Replay::run(&moves)?;
            if json {
                println!("{}", replay.render_json()?);
            } else {
                print!("{}", replay.render_text());
            }
            Ok(())
        }
    }
}
