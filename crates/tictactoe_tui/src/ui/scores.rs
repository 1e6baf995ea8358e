//! Score panel.

use super::player_color;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, ScoreBoard, ScoreKey};

/// Renders the three session counters on one line.
pub fn render_scores(f: &mut Frame, area: Rect, scores: &ScoreBoard) {
    let mut spans = Vec::new();
    for (i, (key, count)) in scores.entries().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let color = match key {
            ScoreKey::X => player_color(Player::X),
            ScoreKey::O => player_color(Player::O),
            ScoreKey::Draw => Color::Yellow,
        };
        spans.push(Span::styled(format!("{}: ", key.label()), Style::default().fg(color)));
        spans.push(Span::styled(
            count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));
    f.render_widget(paragraph, area);
}
