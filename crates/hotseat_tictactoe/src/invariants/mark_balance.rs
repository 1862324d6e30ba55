//! Mark balance invariant: X leads O by zero or one mark.

use super::Invariant;
use crate::GameEngine;
use crate::types::{Board, Mark};
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the property on a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::holds_for(engine.board())
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_balanced_boards_hold() {
        assert!(MarkBalanceInvariant::holds_for(&Board::new()));
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert!(MarkBalanceInvariant::holds_for(&board));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board = Board::from_cells([O, E, E, E, E, E, E, E, E]);
        assert!(!MarkBalanceInvariant::holds_for(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
        assert!(!MarkBalanceInvariant::holds_for(&board));
    }
}
