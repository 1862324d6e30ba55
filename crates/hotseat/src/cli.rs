//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Hotseat - two-player tic-tac-toe on one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Local two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Board indices (0-8), comma-separated, X moving first
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, with `play` as the default.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
