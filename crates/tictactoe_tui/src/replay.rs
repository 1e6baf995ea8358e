//! Non-interactive play: apply a list of moves and report the result.

use serde::Serialize;
use tictactoe_engine::{GameEngine, GameState, ParsePositionError, Player, Position, ScoreBoard};
use tracing::{info, instrument, warn};

/// A move the engine refused during a replay.
#[derive(Debug, Clone, Serialize)]
pub struct IgnoredMove {
    /// Zero-based index into the input list.
    pub index: usize,
    /// The refused position.
    pub position: Position,
    /// Why it was refused.
    pub reason: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    /// Final round state.
    pub state: GameState,
    /// Session scores after the replay.
    pub scores: ScoreBoard,
    /// Moves that were refused and skipped.
    pub ignored: Vec<IgnoredMove>,
}

impl ReplaySummary {
    /// Human-readable report: board, status, scores and skipped moves.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{}\n\nStatus: {}\nScores: X {} | O {} | Draws {}\n",
            self.state.board().display(),
            self.state.status(),
            self.scores.wins(Player::X),
            self.scores.wins(Player::O),
            self.scores.draws(),
        );
        for ignored in &self.ignored {
            out.push_str(&format!(
                "Ignored move #{} ({}): {}\n",
                ignored.index + 1,
                ignored.position,
                ignored.reason
            ));
        }
        out
    }
}

/// Parses each argument as a position; arguments may hold comma-separated lists.
///
/// # Errors
///
/// Returns the first entry that names no position.
#[instrument]
pub fn parse_moves(args: &[String]) -> Result<Vec<Position>, ParsePositionError> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Plays `positions` on a fresh engine, skipping refused moves as the
/// interactive front end does.
#[instrument(skip(positions))]
pub fn replay(positions: &[Position]) -> ReplaySummary {
    let mut engine = GameEngine::new();
    let mut ignored = Vec::new();

    for (index, &position) in positions.iter().enumerate() {
        if let Err(e) = engine.apply_move(position) {
            warn!(index, %position, error = %e, "Skipping refused move");
            ignored.push(IgnoredMove {
                index,
                position,
                reason: e.to_string(),
            });
        }
    }

    info!(status = %engine.state().status(), ignored = ignored.len(), "Replay finished");
    ReplaySummary {
        state: engine.state().clone(),
        scores: *engine.scores(),
        ignored,
    }
}
