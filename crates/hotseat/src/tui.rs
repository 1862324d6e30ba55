//! Terminal setup and the interactive event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::app::{App, AppAction};
use crate::config::Theme;
use crate::ui;

/// Runs the interactive game until the players quit.
#[instrument(skip(theme))]
pub fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting hotseat TUI");

    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(theme);
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Hotseat TUI exited");
    res
}

/// Leaves raw mode and the alternate screen, ignoring failures.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Runs a cleanup closure on drop, including on early `?` returns.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}

/// Draws and handles key presses until [`AppAction::Quit`].
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == AppAction::Quit {
                info!("Players quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fails_after_setup(restored: &Cell<bool>) -> Result<()> {
        let _restore = RestoreGuard::new(|| restored.set(true));
        anyhow::bail!("terminal setup failed")
    }

    #[test]
    fn test_guard_restores_on_early_error() {
        let restored = Cell::new(false);
        assert!(fails_after_setup(&restored).is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_guard_restores_once_on_normal_exit() {
        let count = Cell::new(0);
        {
            let _restore = RestoreGuard::new(|| count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }
}
