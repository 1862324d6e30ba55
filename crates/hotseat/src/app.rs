//! Application state and key handling.

use crossterm::event::KeyCode;
use hotseat_tictactoe::{BoardView, GameEngine, MoveOutcome, Position};
use tracing::{debug, instrument};

use crate::config::Theme;
use crate::input::{Command, command_for};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Exit the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    theme: Theme,
    notice: Option<String>,
}

impl App {
    /// Creates an app with a fresh game.
    pub fn new(theme: Theme) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            theme,
            notice: None,
        }
    }

    /// The game being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Board colors.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Why the last move was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        let Some(command) = command_for(self.cursor, key) else {
            return AppAction::Continue;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Cursor(pos) => self.cursor = pos,
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Command::Restart => self.restart(),
            Command::Quit => return AppAction::Quit,
        }
        AppAction::Continue
    }

    fn place(&mut self, pos: Position) {
        self.notice = match self.engine.apply_position(pos) {
            MoveOutcome::Placed(_) => None,
            MoveOutcome::Rejected(reason) => Some(reason.to_string()),
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.cursor = Position::Center;
        self.notice = None;
    }
}
