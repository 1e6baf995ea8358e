//! Terminal setup and the interactive loop.

use crate::app::{App, Flow};
use crate::auto_reset::AppCommand;
use crate::config::AppConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_engine::GameEngine;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored when the loop returns, when setup fails part
/// way through, and before a panic message is printed.
#[instrument(skip_all)]
pub async fn run(config: AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let app = App::new(GameEngine::new(), &config, command_tx);

    let res = run_app(&mut terminal, app, &mut command_rx, &config).await;

    guard.release()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("TUI exited");
    res
}

async fn run_app(
    terminal: &mut Term,
    mut app: App,
    command_rx: &mut UnboundedReceiver<AppCommand>,
    config: &AppConfig,
) -> Result<()> {
    let tick = config.tick_rate();
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(command) = command_rx.try_recv() {
            app.handle_command(command);
        }

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Restores the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Undoes raw mode and the alternate screen when dropped.
struct TerminalGuard {
    restore: Option<fn() -> io::Result<()>>,
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Armed before entering the screen so a failure below still leaves raw mode.
        let guard = Self::with_restore(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    fn with_restore(restore: fn() -> io::Result<()>) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restores now and reports the error instead of logging it.
    fn release(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(restore) => restore(),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take()
            && let Err(e) = restore()
        {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}
