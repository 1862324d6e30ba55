//! Hotseat tic-tac-toe engine.
//!
//! Pure game logic for two players taking turns on one device: board
//! state, turn tracking, win and draw detection, and move validation.
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, Mark};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index)?;
//! }
//!
//! let status = engine.status();
//! assert_eq!(status.winner(), Some(Mark::X));
//! assert_eq!(status.status_text(), "Winner: X");
//! # Ok::<(), hotseat_tictactoe::InvalidIndexError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use action::{Move, MoveOutcome, Rejection};
pub use engine::GameEngine;
pub use error::InvalidIndexError;
pub use position::Position;
pub use rules::{InvalidLineError, WinningLine};
pub use status::{DerivedStatus, GamePhase, evaluate};
pub use types::{BOARD_SIZE, Board, Cell, Mark};
pub use view::{BoardView, CellView, cell_label};
