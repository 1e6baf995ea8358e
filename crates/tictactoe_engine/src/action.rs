//! Moves and the ways a move can be refused.

use crate::position::Position;
use crate::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Moves are recorded in the round history in the order they were played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A move the engine refused.
///
/// Refusals are expected in normal play (a double click, a key pressed
/// after the round ended). The engine state is untouched and callers are
/// free to drop the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has been won or drawn and awaits a reset.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for InvalidMove {}
