//! Status derived from the board and the mark to move.

use crate::rules::{WinningLine, check_winner, is_full};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Drawn,
}

/// Everything a front end needs to know about the game beyond the board.
///
/// Never stored alongside the board; produced fresh by [`evaluate`].
/// Serialize-only, so it cannot be built any other way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedStatus {
    phase: GamePhase,
    winning_line: Option<WinningLine>,
    to_move: Mark,
}

impl DerivedStatus {
    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.phase {
            GamePhase::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// True if the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        self.phase == GamePhase::Drawn
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::InProgress
    }

    /// Status line: `Turn: X`, `Winner: O` or `Draw`.
    pub fn status_text(&self) -> String {
        match self.phase {
            GamePhase::InProgress => format!("Turn: {}", self.to_move),
            GamePhase::Won(mark) => format!("Winner: {}", mark),
            GamePhase::Drawn => "Draw".to_string(),
        }
    }
}

/// Computes the status of `board` with `to_move` next.
///
/// Total over every board, reachable or not.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, to_move: Mark) -> DerivedStatus {
    let (phase, winning_line) = match check_winner(board) {
        Some((mark, line)) => (GamePhase::Won(mark), Some(line)),
        None if is_full(board) => (GamePhase::Drawn, None),
        None => (GamePhase::InProgress, None),
    };
    DerivedStatus {
        phase,
        winning_line,
        to_move,
    }
}
