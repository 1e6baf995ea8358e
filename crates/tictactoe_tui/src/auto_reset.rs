//! Cancellable timer that starts a new round after a win or draw.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Commands delivered to the UI loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// The auto-reset delay for this round has elapsed.
    AutoReset {
        /// Round the timer was scheduled for.
        round: u64,
    },
}

/// A single pending auto-reset, owned by the front end.
///
/// Scheduling replaces any pending timer; dropping the handle cancels it.
#[derive(Debug)]
pub struct AutoReset {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    deadline: Option<Instant>,
}

impl AutoReset {
    /// Creates an idle timer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Sends [`AppCommand::AutoReset`] for `round` once the delay elapses.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self, commands), fields(delay = ?self.delay))]
    pub fn schedule(&mut self, round: u64, commands: UnboundedSender<AppCommand>) {
        self.cancel();
        let deadline = Instant::now() + self.delay;
        self.deadline = Some(deadline);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            debug!(round, "Auto-reset timer fired");
            // The receiver is gone only when the UI is shutting down.
            let _ = commands.send(AppCommand::AutoReset { round });
        }));
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Auto-reset cancelled");
            }
            handle.abort();
        }
    }

    /// True while a timer is scheduled and has not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Time left before the pending timer fires.
    pub fn remaining(&self) -> Option<Duration> {
        if !self.is_pending() {
            return None;
        }
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

impl Drop for AutoReset {
    fn drop(&mut self) {
        self.cancel();
    }
}
