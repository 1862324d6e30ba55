//! Hotseat - terminal front end for local two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`GameEngine`](hotseat_tictactoe::GameEngine) and cursor
//! - **UI**: stateless ratatui rendering of a [`BoardView`](hotseat_tictactoe::BoardView)
//! - **Replay**: applies a move list without a terminal
//! - **Config**: TOML settings for colors and logging

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod tui;
mod ui;

pub use app::{App, AppAction};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, HotseatConfig, Theme};
pub use input::{Command as KeyCommand, command_for, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::Replay;
pub use tui::run_tui;
pub use ui::draw;
