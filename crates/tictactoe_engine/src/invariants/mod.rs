//! First-class invariants for a tic-tac-toe round.
//!
//! Invariants are logical properties that must hold after every engine
//! transition. They are testable independently and the engine checks the
//! full set after each change.

use crate::types::GameState;
use tracing::{error, instrument};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_marks;
pub mod history_consistent;
pub mod status_matches_board;

pub use balanced_marks::BalancedMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;

/// All round invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    HistoryConsistentInvariant,
    StatusMatchesBoardInvariant,
);

/// Checks every round invariant, logging and debug-asserting on failure.
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if let Err(violations) = GameInvariants::check_all(state) {
        error!(?violations, board = %state.board().display(), "Game invariants violated");
        if cfg!(debug_assertions) {
            panic!("game invariants violated: {violations:?}");
        }
    }
}
