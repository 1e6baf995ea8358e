//! The round-and-score state machine.

use crate::action::{InvalidMove, Move};
use crate::event::{GameEvent, GameObserver};
use crate::invariants::assert_invariants;
use crate::line::WinningLine;
use crate::position::Position;
use crate::rules;
use crate::score::{ScoreBoard, ScoreKey};
use crate::types::{GameState, GameStatus};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine for a session of repeated rounds.
///
/// Owns the current round and the session scores. Every operation is a
/// synchronous transition; observers registered with
/// [`GameEngine::subscribe`] hear about each change as it happens.
pub struct GameEngine {
    state: GameState,
    scores: ScoreBoard,
    round: u64,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Creates an engine at round 1 with X to move and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            scores: ScoreBoard::new(),
            round: 1,
            observers: Vec::new(),
        }
    }

    /// Builds a fresh engine and plays the positions in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMove`] encountered.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Result<Self, InvalidMove> {
        let mut engine = Self::new();
        for pos in positions {
            engine.apply_move(pos)?;
        }
        Ok(engine)
    }

    /// Returns the current round.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session scores.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Number of the current round, starting at 1.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The completed line when the round has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.state.status() {
            GameStatus::Won(_, line) => Some(line),
            _ => None,
        }
    }

    /// Registers an observer for every subsequent event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the round is evaluated: a completed line wins and scores
    /// the round, a full board draws and scores the draw, and otherwise the
    /// turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// [`InvalidMove::RoundOver`] once the round is won or drawn and
    /// [`InvalidMove::SquareOccupied`] for a taken square. A refused move
    /// changes nothing and notifies no one.
    #[instrument(skip(self), fields(round = self.round, player = %self.state.current_player()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<&GameState, InvalidMove> {
        if self.state.status().is_terminal() {
            debug!("Move refused, round is over");
            return Err(InvalidMove::RoundOver);
        }
        if !self.state.board().is_empty(pos) {
            debug!("Move refused, square occupied");
            return Err(InvalidMove::SquareOccupied(pos));
        }

        let mov = self.state.place(pos);
        self.emit(GameEvent::MarkPlaced(mov));

        let status = rules::evaluate(self.state.board());
        self.state.set_status(status);
        match status {
            GameStatus::Won(player, line) => {
                self.scores.record(ScoreKey::from(player));
                info!(
                    %player,
                    %line,
                    wins = self.scores.wins(player),
                    "Round won"
                );
                self.emit(GameEvent::RoundWon { player, line });
            }
            GameStatus::Draw => {
                self.scores.record(ScoreKey::Draw);
                info!(draws = self.scores.draws(), "Round drawn");
                self.emit(GameEvent::RoundDrawn);
            }
            GameStatus::InProgress => {
                self.state.pass_turn();
                self.emit(GameEvent::TurnPassed(self.state.current_player()));
            }
        }

        assert_invariants(&self.state);
        Ok(&self.state)
    }

    /// Starts a fresh round with X to move. Scores are kept.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset_game(&mut self) -> &GameState {
        self.state = GameState::new();
        self.round += 1;
        info!(round = self.round, "Round reset");
        self.emit(GameEvent::RoundReset { round: self.round });
        &self.state
    }

    /// Zeroes all scores and starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) -> &ScoreBoard {
        self.scores.clear();
        info!("Scores cleared");
        self.emit(GameEvent::ScoresCleared);
        self.reset_game();
        &self.scores
    }

    /// Moves that have been played this round.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    fn emit(&mut self, event: GameEvent) {
        let Self {
            state,
            scores,
            observers,
            ..
        } = self;
        for observer in observers.iter_mut() {
            observer.notify(&event, state, scores);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("scores", &self.scores)
            .field("round", &self.round)
            .field("observers", &self.observers.len())
            .finish()
    }
}
