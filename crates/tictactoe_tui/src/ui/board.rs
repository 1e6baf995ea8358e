//! Tic-tac-toe board rendering.

use super::player_color;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_engine::{GameEngine, Position, Square};

/// Renders the board with the cursor and, after a win, the winning line.
pub fn render_board(f: &mut Frame, area: Rect, engine: &GameEngine, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
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

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, area, engine, cursor, row);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, engine: &GameEngine, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            render_square(f, cols[col * 2], engine, cursor, pos);
        }
        if col < 2 {
            render_vertical_sep(f, cols[col * 2 + 1]);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, engine: &GameEngine, cursor: Position, pos: Position) {
    let (text, mut style) = match engine.state().board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if engine.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == cursor && engine.state().is_in_progress() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad to the cell's height so the background fills the square.
    let text = format!("\n{}\n", text);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
