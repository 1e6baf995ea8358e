//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the engine so
//! invariants and tests can evaluate a board without driving a round.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// The first line in scan order that one player holds wins. Otherwise a
/// full board is a draw, and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = winning_line(board) {
        GameStatus::Won(player, line)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
