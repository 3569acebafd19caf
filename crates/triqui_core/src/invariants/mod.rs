//! First-class invariants over the game state.
//!
//! Invariants are logical properties that hold for every reachable game.
//! They are checked in debug builds after each accepted move and used by
//! the saved-session codec to reject payloads that decode to impossible
//! states.

mod exclusive_winner;
mod mark_balance;
mod status_consistent;

pub use exclusive_winner::ExclusiveWinnerInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use status_consistent::StatusConsistentInvariant;

use crate::state::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Record of a violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked as a unit.
///
/// Implemented for tuples so related invariants compose into one
/// verification step.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
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

/// All triqui invariants as a composable set.
pub type TriquiInvariants = (
    MarkBalanceInvariant,
    ExclusiveWinnerInvariant,
    StatusConsistentInvariant,
);

/// Asserts that all game invariants hold (debug builds only).
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        TriquiInvariants::check_all(state).is_ok(),
        "game invariants violated: {:?}",
        TriquiInvariants::check_all(state)
    );
}
