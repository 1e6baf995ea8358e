//! Status invariant: the stored status and turn agree with the board.

use super::Invariant;
use crate::rules;
use crate::types::{GameState, Player};
use tracing::{instrument, warn};

/// Invariant: the status is what the rules say about the board, and the
/// current player is the one due to move (or, once the round is over, the
/// one who made the final move).
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameState> for StatusMatchesBoardInvariant {
    #[instrument(skip(state))]
    fn holds(state: &GameState) -> bool {
        let evaluated = rules::evaluate(state.board());
        if evaluated != state.status() {
            warn!(stored = ?state.status(), ?evaluated, "Status does not match board");
            return false;
        }

        let expected = if state.is_in_progress() {
            if state.board().count(Player::X) == state.board().count(Player::O) {
                Some(Player::X)
            } else {
                Some(Player::O)
            }
        } else {
            state.history().last().map(|mov| mov.player)
        };

        let valid = expected == Some(state.current_player());
        if !valid {
            warn!(current = ?state.current_player(), ?expected, "Turn does not match board");
        }
        valid
    }

    fn description() -> &'static str {
        "Status and current player agree with the board"
    }
}
