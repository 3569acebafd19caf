//! Screen layout and rendering.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use triqui_core::GameStatus;

/// Draws the whole screen from the current app state.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Block::default().title(" Triqui ").borders(Borders::ALL);
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(f, chunks[0], app);
    board::render_board(f, chunks[1], app);
    render_message(f, chunks[2], app);
    render_help(f, chunks[3]);
}

fn render_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (text, style) = match app.state().status() {
        GameStatus::InProgress => (
            format!("Player {} to move", app.state().turn()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        GameStatus::Won(player) => (
            format!("Player {} wins!", player),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        GameStatus::Draw => (
            "Draw: board full".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let paragraph = Paragraph::new(app.message().to_string())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: ratatui::layout::Rect) {
    let help = "arrows move · Enter place · 1-9 direct · n new · s save · l load · q quit";
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
