//! History consistency invariant: the move history replays to the board.

use super::Invariant;
use crate::types::{Board, GameState, Player, Square};
use tracing::{instrument, warn};

/// Invariant: replaying the history with alternating players, X first,
/// rebuilds exactly the current board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    #[instrument(skip(state))]
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        let mut expected = Player::X;

        for (turn, mov) in state.history().iter().enumerate() {
            if mov.player != expected || !replayed.is_empty(mov.position) {
                warn!(turn, ?mov, ?expected, "History out of order");
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.player));
            expected = expected.opponent();
        }

        let valid = &replayed == state.board();
        if !valid {
            warn!(history_len = state.history().len(), "History does not match board");
        }
        valid
    }

    fn description() -> &'static str {
        "Move history alternates from X and rebuilds the board"
    }
}
