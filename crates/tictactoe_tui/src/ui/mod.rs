//! UI rendering using ratatui.
//!
//! Rendering is stateless: every frame is drawn from the [`App`] and the
//! engine it wraps.

mod board;
mod scores;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameStatus, Player};

pub use board::render_board;
pub use scores::render_scores;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app.engine(), app.cursor());

    let state = app.engine().state();
    let status = Paragraph::new(vec![
        Line::styled(
            app.status_message(),
            status_style(state.status(), state.current_player()),
        ),
        Line::styled(app.hint(), Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    render_scores(f, chunks[3], app.engine().scores());

    let help = Paragraph::new("1-9 or arrows+Enter: play | R: new round | C: clear scores | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

/// Colour used for a player's marks.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Blue,
    }
}

fn status_style(status: GameStatus, current: Player) -> Style {
    match status {
        GameStatus::InProgress => Style::default().fg(player_color(current)),
        GameStatus::Won(player, _) => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}
