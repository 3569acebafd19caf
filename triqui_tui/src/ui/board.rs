//! Board grid rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use triqui_core::{Player, Position, Square};

/// Renders the 3x3 board with the cursor highlighted.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 1);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 2);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    render_square(f, cols[0], app, row, 0);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], app, row, 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], app, row, 2);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, row: usize, col: usize) {
    let pos = Position::ALL[row * 3 + col];
    let square = app.state().board().get(pos);

    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if pos == app.cursor() {
        style = style.bg(Color::Gray);
    }

    // Pad to the square's height so the cursor background fills the cell.
    let lines = format!("\n{}\n", text);
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1]);
    vertical[1]
}
