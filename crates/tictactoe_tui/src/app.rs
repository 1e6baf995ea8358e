//! Application state and logic.

use crate::auto_reset::{AppCommand, AutoReset};
use crate::config::AppConfig;
use crate::input::{self, InputAction};
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, GameEvent, GameState, GameStatus, Position, ScoreBoard};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument};

/// Whether the UI loop keeps running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep drawing and reading keys.
    Continue,
    /// Leave the UI loop.
    Quit,
}

/// Main application state.
///
/// Wraps an injected [`GameEngine`], listens to its events and owns the
/// auto-reset timer. The engine stays the only source of game state; the
/// app adds just the cursor and the timer.
pub struct App {
    engine: GameEngine,
    events: UnboundedReceiver<GameEvent>,
    commands: UnboundedSender<AppCommand>,
    auto_reset: Option<AutoReset>,
    cursor: Position,
}

impl App {
    /// Creates an application around `engine`.
    ///
    /// Timer commands are sent on `commands`; the caller feeds them back
    /// through [`App::handle_command`].
    pub fn new(
        mut engine: GameEngine,
        config: &AppConfig,
        commands: UnboundedSender<AppCommand>,
    ) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        engine.subscribe(move |event: &GameEvent, _: &GameState, _: &ScoreBoard| {
            // Receiver lives as long as the app that owns the engine.
            let _ = event_tx.send(*event);
        });

        Self {
            engine,
            events,
            commands,
            auto_reset: config.auto_reset_delay().map(AutoReset::new),
            cursor: Position::Center,
        }
    }

    /// Gets the engine for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True while an automatic new round is scheduled.
    pub fn auto_reset_pending(&self) -> bool {
        self.auto_reset.as_ref().is_some_and(AutoReset::is_pending)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        let Some(action) = input::action_for(key) else {
            return Flow::Continue;
        };

        match action {
            InputAction::Select(pos) => self.select(pos),
            InputAction::SelectCursor => self.select(self.cursor),
            InputAction::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            InputAction::NewRound => self.new_round(),
            InputAction::ClearScores => self.clear_scores(),
            InputAction::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Handles a command from a background task.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::AutoReset { round } => {
                if round == self.engine.round() && self.engine.state().status().is_terminal() {
                    info!(round, "Starting next round automatically");
                    self.engine.reset_game();
                    self.process_events();
                } else {
                    debug!(round, current = self.engine.round(), "Ignoring stale auto-reset");
                }
            }
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Refused moves are expected (double presses, presses after the round
    /// ended) and are dropped without a message.
    pub fn select(&mut self, pos: Position) {
        self.cursor = pos;
        if let Err(e) = self.engine.apply_move(pos) {
            debug!(error = %e, position = %pos, "Ignoring refused move");
        }
        self.process_events();
    }

    /// Starts a new round, keeping scores.
    pub fn new_round(&mut self) {
        self.engine.reset_game();
        self.process_events();
    }

    /// Zeroes scores and starts a new round.
    pub fn clear_scores(&mut self) {
        self.engine.reset_score();
        self.process_events();
    }

    /// Main status line: whose turn it is, or how the round ended.
    pub fn status_message(&self) -> String {
        let state = self.engine.state();
        match state.status() {
            GameStatus::InProgress => format!("Player {}'s Turn", state.current_player()),
            GameStatus::Won(player, _) => format!("Player {} Wins! 🎉", player),
            GameStatus::Draw => "It's a Draw! 🤝".to_string(),
        }
    }

    /// Secondary line shown under the status.
    pub fn hint(&self) -> String {
        if let Some(left) = self.auto_reset.as_ref().and_then(AutoReset::remaining) {
            let secs = left.as_millis().div_ceil(1000);
            format!("Next round starts in {}s, or press R", secs)
        } else if self.engine.state().status().is_terminal() {
            "Press R for a new round".to_string()
        } else {
            format!("Round {}", self.engine.round())
        }
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling game event");
            match event {
                event if event.ends_round() => {
                    let round = self.engine.round();
                    if let Some(timer) = self.auto_reset.as_mut() {
                        timer.schedule(round, self.commands.clone());
                    }
                }
                GameEvent::RoundReset { .. } => {
                    if let Some(timer) = self.auto_reset.as_mut() {
                        timer.cancel();
                    }
                }
                _ => {}
            }
        }
    }
}
