//! Tic-tac-toe rules engine with session scoring.
//!
//! The engine is a synchronous state machine: it validates moves, detects
//! wins and draws, alternates turns and keeps score across rounds. It knows
//! nothing about rendering; a front end drives it through
//! [`GameEngine::apply_move`], [`GameEngine::reset_game`] and
//! [`GameEngine::reset_score`] and reads back [`GameState`] and
//! [`ScoreBoard`], optionally subscribing to [`GameEvent`]s.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player, Position, WinningLine};
//!
//! let mut engine = GameEngine::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     engine.apply_move(pos)?;
//! }
//!
//! assert_eq!(
//!     engine.state().status(),
//!     GameStatus::Won(Player::X, WinningLine::TOP_ROW)
//! );
//! assert_eq!(engine.scores().wins(Player::X), 1);
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod event;
pub mod invariants;
mod line;
mod position;
pub mod rules;
mod score;
mod types;

pub use action::{InvalidMove, Move};
pub use engine::GameEngine;
pub use event::{GameEvent, GameObserver};
pub use line::WinningLine;
pub use position::{ParsePositionError, Position};
pub use score::{ScoreBoard, ScoreKey};
pub use types::{Board, GameState, GameStatus, Player, Square};
