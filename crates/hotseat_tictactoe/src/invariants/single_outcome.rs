//! Single outcome invariant: at most one mark owns a completed line.

use super::Invariant;
use crate::GameEngine;
use crate::rules::LINES;
use crate::types::{Board, Cell, Mark};

/// Invariant: never more than one mark holds a completed line.
///
/// Play stops at the first completed line, so a second mark can never
/// complete one afterwards.
pub struct SingleOutcomeInvariant;

impl SingleOutcomeInvariant {
    /// Checks the property on a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let cells = board.cells();
        let completed_by = |mark: Mark| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(mark)))
        };
        !(completed_by(Mark::X) && completed_by(Mark::O))
    }
}

impl Invariant<GameEngine> for SingleOutcomeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::holds_for(engine.board())
    }

    fn description() -> &'static str {
        "At most one mark completes a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_single_winner_holds() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert!(SingleOutcomeInvariant::holds_for(&board));
    }

    #[test]
    fn test_double_winner_violates() {
        let board = Board::from_cells([X, X, X, E, E, E, O, O, O]);
        assert!(!SingleOutcomeInvariant::holds_for(&board));
    }
}
