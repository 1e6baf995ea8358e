//! Terminal front end for [`tictactoe_engine`].
//!
//! Wraps a [`GameEngine`](tictactoe_engine::GameEngine) in a ratatui UI with
//! keyboard input, a running scoreboard and an optional automatic new round
//! after each win or draw. A non-interactive [`replay`] mode applies a move
//! list and prints the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod auto_reset;
pub mod config;
pub mod input;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, Flow};
pub use auto_reset::{AppCommand, AutoReset};
pub use config::{AppConfig, ConfigError};
pub use input::InputAction;
pub use replay::{IgnoredMove, ReplaySummary};
