//! Read-only snapshot of a game for front ends.
//!
//! Front ends render from a [`BoardView`] and send back only move and
//! restart requests. The per-cell label text is a stable contract used by
//! accessibility tooling and tests: `Square N` for an empty square and
//! `Square N, X` once marked, with `N` counted from 1.

use crate::GameEngine;
use crate::position::Position;
use crate::rules::WinningLine;
use crate::types::{Cell, Mark};
use serde::Serialize;
use tracing::instrument;

/// Descriptive label for the cell at `pos`.
pub fn cell_label(pos: Position, cell: Cell) -> String {
    let number = pos.to_index() + 1;
    match cell {
        Cell::Empty => format!("Square {}", number),
        Cell::Occupied(mark) => format!("Square {}, {}", number, mark),
    }
}

/// One square as a front end should present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board index, 0-8.
    pub index: usize,
    /// Contents.
    pub cell: Cell,
    /// Descriptive label, see [`cell_label`].
    pub label: String,
    /// False once occupied or once the game is over.
    pub enabled: bool,
    /// Part of the winning line.
    pub winning: bool,
}

/// Snapshot of the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// The nine squares in index order.
    pub cells: Vec<CellView>,
    /// `Turn: X`, `Winner: O` or `Draw`.
    pub status_text: String,
    /// True once won or drawn.
    pub is_over: bool,
    /// Mark to move, hidden once the game is over.
    pub current_player: Option<Mark>,
    /// The completed line, if any.
    pub winning_line: Option<WinningLine>,
}

impl BoardView {
    /// Builds a snapshot of `engine`.
    #[instrument(skip(engine))]
    pub fn from_engine(engine: &GameEngine) -> Self {
        let status = engine.status();
        let is_over = status.is_over();
        let winning_line = status.winning_line();

        let cells = engine
            .board()
            .cells()
            .iter()
            .zip(Position::ALL)
            .map(|(&cell, pos)| CellView {
                index: pos.to_index(),
                cell,
                label: cell_label(pos, cell),
                enabled: cell.is_empty() && !is_over,
                winning: winning_line.is_some_and(|line| line.contains(pos.to_index())),
            })
            .collect();

        Self {
            cells,
            status_text: status.status_text(),
            is_over,
            current_player: (!is_over).then(|| engine.to_move()),
            winning_line,
        }
    }
}
