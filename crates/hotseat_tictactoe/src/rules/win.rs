//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Three board indices forming a completed line.
///
/// Always one of [`LINES`]; deserialization rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]")]
pub struct WinningLine([usize; 3]);

/// Indices that are not one of the eight winning triples.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{:?} is not a winning line", indices)]
pub struct InvalidLineError {
    /// The rejected indices.
    pub indices: [usize; 3],
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = InvalidLineError;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        if LINES.contains(&indices) {
            Ok(Self(indices))
        } else {
            Err(InvalidLineError { indices })
        }
    }
}

impl WinningLine {
    /// The indices of the line, in ascending order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// True if `index` is one of the three cells.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] order whose three cells hold the
/// same mark. On boards with several complete lines the earliest wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some((mark, WinningLine([a, b, c])))
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            check_winner(&board),
            Some((Mark::X, WinningLine([0, 1, 2])))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_cells([X, X, O, E, O, E, O, E, X]);
        assert_eq!(
            check_winner(&board),
            Some((Mark::O, WinningLine([2, 4, 6])))
        );
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_cells([X, O, E, X, O, E, E, O, X]);
        assert_eq!(
            check_winner(&board),
            Some((Mark::O, WinningLine([1, 4, 7])))
        );
    }

    #[test]
    fn test_first_line_wins_on_malformed_board() {
        // Both X's top row and O's bottom row are complete.
        let board = Board::from_cells([X, X, X, E, E, E, O, O, O]);
        assert_eq!(
            check_winner(&board),
            Some((Mark::X, WinningLine([0, 1, 2])))
        );
    }

    #[test]
    fn test_deserialize_accepts_fixed_triples_only() {
        let line: WinningLine = serde_json::from_str("[2,4,6]").unwrap();
        assert_eq!(line.indices(), [2, 4, 6]);

        assert!(serde_json::from_str::<WinningLine>("[9,9,9]").is_err());
        assert!(serde_json::from_str::<WinningLine>("[0,1,3]").is_err());
        // Same cells, wrong order.
        assert!(serde_json::from_str::<WinningLine>("[2,1,0]").is_err());
    }

    #[test]
    fn test_try_from_error_names_indices() {
        let err = WinningLine::try_from([9, 9, 9]).unwrap_err();
        assert_eq!(err.indices, [9, 9, 9]);
        assert_eq!(err.to_string(), "[9, 9, 9] is not a winning line");
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), None);
    }
}
