//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use hotseat_tictactoe::{BoardView, Cell, CellView, Mark, Position};

use crate::app::App;
use crate::config::Theme;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(1),            // Subtitle
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Controls
            Constraint::Length(1),            // Legend and tip
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Two players. One device. First to 3 in a row wins.")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    draw_status(frame, chunks[2], &view, app.theme());
    draw_board(frame, chunks[3], &view, app.cursor(), app.theme());
    draw_controls(frame, chunks[4], app.notice());
    draw_legend(frame, chunks[5], app.theme());
}

fn mark_style(mark: Mark, theme: &Theme) -> Style {
    let color = match mark {
        Mark::X => theme.x,
        Mark::O => theme.o,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_status(frame: &mut Frame, area: Rect, view: &BoardView, theme: &Theme) {
    let mut spans = vec![Span::styled(
        view.status_text.clone(),
        Style::default().fg(Color::Yellow),
    )];

    // The pill disappears once the game is over.
    if let Some(mark) = view.current_player {
        spans.push(Span::raw("   Current player "));
        spans.push(Span::styled(format!("[{}]", mark), mark_style(mark, theme)));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position, theme: &Theme) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, theme, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    cursor: Position,
    theme: &Theme,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        let cell = &view.cells[row * 3 + col];
        let has_cursor = !view.is_over && cell.index == cursor.to_index();
        draw_cell(frame, cols[col * 2], cell, has_cursor, theme);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, has_cursor: bool, theme: &Theme) {
    let (text, mut style) = match cell.cell {
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark, theme)),
        Cell::Empty if cell.enabled => (
            (cell.index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
    };

    let background = if cell.winning {
        Style::default().bg(theme.highlight)
    } else {
        Style::default()
    };
    if has_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![Line::from(""), Line::from(Span::styled(text, style))];
    let paragraph = Paragraph::new(lines)
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let text = match notice {
        Some(reason) => format!("{} | R: Restart | Q: Quit", reason),
        None => "Arrows + Enter or 1-9: Move | R: Restart | Q: Quit".to_string(),
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn draw_legend(frame: &mut Frame, area: Rect, theme: &Theme) {
    let legend = Line::from(vec![
        Span::styled("● X", mark_style(Mark::X, theme)),
        Span::raw("  "),
        Span::styled("● O", mark_style(Mark::O, theme)),
        Span::raw("   Tip: You can’t overwrite a filled square."),
    ]);
    frame.render_widget(Paragraph::new(legend).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
