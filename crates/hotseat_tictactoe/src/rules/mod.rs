//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so they can be evaluated on any board, including ones no
//! legal game reaches.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{InvalidLineError, LINES, WinningLine, check_winner};
