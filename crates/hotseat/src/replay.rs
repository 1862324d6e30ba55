//! Non-interactive replay of a move list.

use anyhow::{Context, Result};
use hotseat_tictactoe::{BoardView, GameEngine, MoveOutcome};
use tracing::{info, instrument, warn};

/// Result of replaying a move list.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Final game state.
    pub engine: GameEngine,
    /// One outcome per requested move.
    pub outcomes: Vec<MoveOutcome>,
}

impl Replay {
    /// Applies `moves` in order to a new game.
    ///
    /// Ignored moves are recorded, not fatal. An out-of-range index aborts.
    #[instrument]
    pub fn run(moves: &[usize]) -> Result<Self> {
        let mut engine = GameEngine::new();
        let mut outcomes = Vec::with_capacity(moves.len());

        for (step, &index) in moves.iter().enumerate() {
            let outcome = engine
                .apply_move(index)
                .with_context(|| format!("Move {} is invalid", step + 1))?;
            if let MoveOutcome::Rejected(reason) = outcome {
                warn!(step = step + 1, index, %reason, "Move ignored");
            }
            outcomes.push(outcome);
        }

        info!(status = %engine.status().status_text(), "Replay finished");
        Ok(Self { engine, outcomes })
    }

    /// Text rendering: the board, one line per ignored move, then the status.
    pub fn render_text(&self) -> String {
        let mut out = self.engine.board().display();
        out.push('\n');
        for (step, outcome) in self.outcomes.iter().enumerate() {
            if let MoveOutcome::Rejected(reason) = outcome {
                out.push_str(&format!("\nMove {} ignored: {}", step + 1, reason));
            }
        }
        out.push_str(&format!("\n{}\n", self.engine.status().status_text()));
        out
    }

    /// JSON rendering of the final snapshot.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&BoardView::from_engine(&self.engine))
            .context("Failed to serialize board view")
    }
}
