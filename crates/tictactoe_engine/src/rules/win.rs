//! Win detection logic for tic-tac-toe.

use crate::line::WinningLine;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Finds the first line, in scan order, held entirely by one player.
///
/// Valid play completes at most one line per move, but a board built by
/// hand may hold several; the earliest in [`WinningLine::ALL`] is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WinningLine::ALL {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
