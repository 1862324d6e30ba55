//! Turn parity invariant: the mark to move follows from the mark counts.

use super::Invariant;
use crate::GameEngine;
use crate::types::{Board, Mark};

/// Invariant: X is to move iff X and O have placed the same number of marks.
///
/// Holds after a finishing move as well, since the turn flips on every
/// accepted move.
pub struct TurnParityInvariant;

impl TurnParityInvariant {
    /// Checks the property for an explicit board and mover.
    pub fn holds_for(board: &Board, to_move: Mark) -> bool {
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        to_move == expected
    }
}

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::holds_for(engine.board(), engine.to_move())
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
