//! Tests for key handling and screen rendering.

use crossterm::event::KeyCode;
use hotseat::{App, AppAction, Theme, draw};
use hotseat_tictactoe::{Cell, Mark, Position};
use ratatui::{Terminal, backend::TestBackend};

fn press(app: &mut App, keys: &[KeyCode]) {
    for &key in keys {
        assert_eq!(app.handle_key(key), AppAction::Continue);
    }
}

fn digits(app: &mut App, squares: &str) {
    for c in squares.chars() {
        press(app, &[KeyCode::Char(c)]);
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_screen() {
    let app = App::new(Theme::default());
    let text = screen(&app);
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Turn: X"));
    assert!(text.contains("Current player"));
    assert!(text.contains("Tip: You can’t overwrite a filled square."));
}

#[test]
fn test_arrow_and_enter_place_at_cursor() {
    let mut app = App::new(Theme::default());
    assert_eq!(app.cursor(), Position::Center);

    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(app.engine().board().get(0), Some(Cell::Occupied(Mark::X)));
    assert!(screen(&app).contains("Turn: O"));
}

#[test]
fn test_digit_keys_alternate_turns() {
    let mut app = App::new(Theme::default());
    digits(&mut app, "12");
    let view = app.view();
    assert_eq!(view.cells[0].label, "Square 1, X");
    assert_eq!(view.cells[1].label, "Square 2, O");
    assert_eq!(view.status_text, "Turn: X");
}

#[test]
fn test_occupied_square_shows_notice() {
    let mut app = App::new(Theme::default());
    digits(&mut app, "11");
    assert_eq!(app.notice(), Some("Square is already occupied"));
    assert_eq!(app.engine().to_move(), Mark::O);
    assert!(screen(&app).contains("Square is already occupied"));

    digits(&mut app, "2");
    assert_eq!(app.notice(), None);
}

#[test]
fn test_win_hides_current_player() {
    let mut app = App::new(Theme::default());
    // Squares 1, 4, 2, 5, 3 are indices 0, 3, 1, 4, 2.
    digits(&mut app, "14253");

    let text = screen(&app);
    assert!(text.contains("Winner: X"));
    assert!(!text.contains("Current player"));

    digits(&mut app, "9");
    assert_eq!(app.notice(), Some("Game is already over"));
    assert_eq!(app.engine().board().get(8), Some(Cell::Empty));
}

#[test]
fn test_draw_screen() {
    let mut app = App::new(Theme::default());
    // Indices 0, 1, 2, 5, 3, 6, 4, 8, 7 as 1-based squares.
    digits(&mut app, "123647598");

    let text = screen(&app);
    assert!(text.contains("Draw"));
    assert!(!text.contains("Current player"));
    assert!(app.view().cells.iter().all(|c| !c.enabled));
}

#[test]
fn test_restart_key_resets_game() {
    let mut app = App::new(Theme::default());
    digits(&mut app, "14253");
    press(&mut app, &[KeyCode::Char('r')]);

    let view = app.view();
    assert_eq!(view.status_text, "Turn: X");
    assert!(!view.is_over);
    assert!(view.cells.iter().all(|c| c.cell == Cell::Empty && c.enabled));
    assert_eq!(app.cursor(), Position::Center);
    assert!(screen(&app).contains("Current player"));
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(Theme::default());
    assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
}

#[test]
fn test_unmapped_keys_ignored() {
    let mut app = App::new(Theme::default());
    press(&mut app, &[KeyCode::Tab, KeyCode::Char('z'), KeyCode::Char('0')]);
    assert!(app.engine().board().cells().iter().all(|c| c.is_empty()));
}
