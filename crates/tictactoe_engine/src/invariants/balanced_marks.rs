//! Balanced marks invariant: X moves first, so X has as many marks as O or one more.

use super::Invariant;
use crate::types::{GameState, Player};
use tracing::{instrument, warn};

/// Invariant: the mark counts differ by at most one, in X's favour.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    #[instrument(skip(state))]
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
