//! Results of move requests.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Board index of the move.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Rejection {
    /// The target square already holds a mark.
    #[display("Square is already occupied")]
    Occupied,
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Outcome of [`GameEngine::apply_move`](crate::GameEngine::apply_move).
///
/// A rejected move leaves the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and the turn passed.
    Placed(Move),
    /// The request was ignored.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
