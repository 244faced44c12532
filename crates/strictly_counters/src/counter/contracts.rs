//! Contract-based validation for counter transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} tick {Q}

use super::invariants::{CounterInvariants, InvariantSet};
use super::tick::TickError;
use super::types::CounterState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state)} - must hold before applying the transition
/// - Postcondition: {Q(before, after)} - must hold after applying it
///
/// The counter's only transition is nullary (a tick carries no payload), so
/// unlike richer domains the contract takes no action argument.
pub trait Contract<S> {
    /// Checks preconditions before applying the transition.
    fn pre(state: &S) -> Result<(), TickError>;

    /// Checks postconditions after applying the transition.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), TickError>;
}

// ─────────────────────────────────────────────────────────────
//  Tick Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The next total must stay within the `i64` range.
///
/// This is the crate's overflow policy: a tick that cannot be represented
/// fails loudly instead of wrapping.
pub struct WithinRange;

impl WithinRange {
    /// Validates that one more tick is representable.
    #[instrument(skip(state))]
    pub fn check(state: &CounterState) -> Result<(), TickError> {
        if state.total().checked_add(state.step()).is_none() {
            warn!(
                total = state.total(),
                step = state.step(),
                "Tick rejected: total would overflow"
            );
            return Err(TickError::Overflow {
                total: state.total(),
                step: state.step(),
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Tick Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for tick transitions.
///
/// Preconditions:
/// - New total must be representable (WithinRange)
///
/// Postconditions:
/// - Every recorded delta equals the step
/// - Totals never move against the sign of the step
/// - History remains consistent with the total
pub struct TickContract;

impl Contract<CounterState> for TickContract {
    fn pre(state: &CounterState) -> Result<(), TickError> {
        WithinRange::check(state)
    }

    fn post(_before: &CounterState, after: &CounterState) -> Result<(), TickError> {
        // Verify all invariants using the composed set
        CounterInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            TickError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
