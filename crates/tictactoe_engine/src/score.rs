//! Session score tallies that survive across rounds.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One of the three tallies kept by a [`ScoreBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreKey {
    /// Rounds won by X.
    X,
    /// Rounds won by O.
    O,
    /// Drawn rounds.
    Draw,
}

impl ScoreKey {
    /// Label used when rendering the tally.
    pub fn label(self) -> &'static str {
        match self {
            ScoreKey::X => "Player X",
            ScoreKey::O => "Player O",
            ScoreKey::Draw => "Draws",
        }
    }
}

impl From<Player> for ScoreKey {
    fn from(player: Player) -> Self {
        match player {
            Player::X => ScoreKey::X,
            Player::O => ScoreKey::O,
        }
    }
}

/// Win and draw counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x: u32,
    o: u32,
    draw: u32,
}

impl ScoreBoard {
    /// Creates a scoreboard with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one counter.
    pub fn get(&self, key: ScoreKey) -> u32 {
        match key {
            ScoreKey::X => self.x,
            ScoreKey::O => self.o,
            ScoreKey::Draw => self.draw,
        }
    }

    /// Rounds won by the player.
    pub fn wins(&self, player: Player) -> u32 {
        self.get(player.into())
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draw
    }

    /// Rounds that reached a result.
    pub fn rounds_played(&self) -> u32 {
        self.x.saturating_add(self.o).saturating_add(self.draw)
    }

    /// All three counters in display order.
    pub fn entries(&self) -> [(ScoreKey, u32); 3] {
        [
            (ScoreKey::X, self.x),
            (ScoreKey::O, self.o),
            (ScoreKey::Draw, self.draw),
        ]
    }

    /// True while no round has been scored.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn record(&mut self, key: ScoreKey) {
        let counter = match key {
            ScoreKey::X => &mut self.x,
            ScoreKey::O => &mut self.o,
            ScoreKey::Draw => &mut self.draw,
        };
        *counter = counter.saturating_add(1);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_only_its_counter() {
        let mut scores = ScoreBoard::new();
        scores.record(ScoreKey::O);
        scores.record(ScoreKey::O);
        scores.record(ScoreKey::Draw);

        assert_eq!(scores.wins(Player::X), 0);
        assert_eq!(scores.wins(Player::O), 2);
        assert_eq!(scores.draws(), 1);
        assert_eq!(scores.rounds_played(), 3);
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut scores = ScoreBoard::new();
        scores.record(ScoreKey::X);
        scores.clear();
        assert!(scores.is_zero());
    }
}
