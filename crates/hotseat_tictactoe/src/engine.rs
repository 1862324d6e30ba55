//! The game engine: board, turn, and move validation.

use crate::action::{Move, MoveOutcome, Rejection};
use crate::error::InvalidIndexError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::status::{DerivedStatus, evaluate};
use crate::types::{Board, Cell, Mark};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game engine for two players sharing one device.
///
/// Holds only the board and the mark to move. Winner, draw and status text
/// are recomputed from those on every call to [`GameEngine::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    to_move: Mark,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Computes the current status.
    pub fn status(&self) -> DerivedStatus {
        evaluate(&self.board, self.to_move)
    }

    /// True if a move at `index` would be accepted.
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        self.board.is_empty(index) && !self.status().is_over()
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Moves on an occupied square or after the game has ended are ignored
    /// and reported as [`MoveOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndexError`] if `index` is not in 0-8.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, InvalidIndexError> {
        let Some(position) = Position::from_index(index) else {
            return Err(InvalidIndexError::new(index));
        };
        Ok(self.apply_position(position))
    }

    /// Places the current mark at a named position.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn apply_position(&mut self, position: Position) -> MoveOutcome {
        if self.status().is_over() {
            debug!(reason = %Rejection::GameOver, "Move ignored");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        if self.board.at(position) != Cell::Empty {
            debug!(reason = %Rejection::Occupied, "Move ignored");
            return MoveOutcome::Rejected(Rejection::Occupied);
        }

        let mark = self.to_move;
        self.board.place(position, mark);
        self.to_move = mark.opponent();
        info!("Mark placed");

        if cfg!(debug_assertions) {
            if let Err(violations) = EngineInvariants::check_all(self) {
                error!(?violations, "Engine invariants violated");
                debug_assert!(false, "Engine invariants violated: {:?}", violations);
            }
        }

        MoveOutcome::Placed(Move::new(mark, position))
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("Game restarted");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
