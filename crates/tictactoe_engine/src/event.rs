//! Notifications emitted by the engine after each state change.
//!
//! Observers see the event together with the state and scores it produced,
//! so a renderer can redraw without holding its own copy of either.

use crate::action::Move;
use crate::line::WinningLine;
use crate::score::ScoreBoard;
use crate::types::{GameState, Player};
use serde::{Deserialize, Serialize};

/// Something that just happened to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was written to the board.
    MarkPlaced(Move),
    /// The round continues with this player to move.
    TurnPassed(Player),
    /// The player completed the line and their score went up.
    RoundWon {
        /// Winner of the round.
        player: Player,
        /// Line to highlight.
        line: WinningLine,
    },
    /// The board filled without a winner and the draw count went up.
    RoundDrawn,
    /// A fresh round started.
    RoundReset {
        /// Number of the round that just started (the first round is 1).
        round: u64,
    },
    /// All counters were zeroed.
    ScoresCleared,
}

impl GameEvent {
    /// True for the two events that end a round.
    pub fn ends_round(&self) -> bool {
        matches!(self, GameEvent::RoundWon { .. } | GameEvent::RoundDrawn)
    }
}

/// Receives engine notifications.
pub trait GameObserver {
    /// Called once per event, after the engine has applied it.
    fn notify(&mut self, event: &GameEvent, state: &GameState, scores: &ScoreBoard);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameState, &ScoreBoard),
{
    fn notify(&mut self, event: &GameEvent, state: &GameState, scores: &ScoreBoard) {
        self(event, state, scores)
    }
}
