//! History consistency invariant: the history accounts for the total.

use super::super::types::CounterState;
use super::Invariant;

/// Invariant: Replaying the history from zero reproduces the current total.
///
/// After n ticks the total must equal step * n, and the last recorded tick
/// must agree with the current total. An empty history means a total of
/// zero.
pub struct HistoryConsistentInvariant;

impl Invariant<CounterState> for HistoryConsistentInvariant {
    fn holds(state: &CounterState) -> bool {
        // Replay in i128 so corrupt states cannot overflow the check
        let expected = i128::from(state.step()) * state.history().len() as i128;

        if i128::from(state.total()) != expected {
            return false;
        }

        match state.history().last() {
            Some(last) => last.total() == state.total(),
            None => state.total() == 0,
        }
    }

    fn description() -> &'static str {
        "Replaying the history from zero reproduces the current total"
    }
}
