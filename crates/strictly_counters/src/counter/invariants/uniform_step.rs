//! Uniform step invariant: every tick advances by exactly the step.

use super::super::types::CounterState;
use super::Invariant;

/// Invariant: Every recorded delta equals the counter's step.
///
/// The step is fixed at creation, so the difference between consecutive
/// recorded totals (starting from zero) must always be the step itself.
pub struct UniformStepInvariant;

impl Invariant<CounterState> for UniformStepInvariant {
    fn holds(state: &CounterState) -> bool {
        let mut previous: i128 = 0;

        for tick in state.history() {
            let current = i128::from(tick.total());

            // Deltas computed in i128 so corrupt states cannot overflow the check
            if current - previous != i128::from(state.step()) {
                return false;
            }

            previous = current;
        }

        true
    }

    fn description() -> &'static str {
        "Every recorded tick advances the total by exactly the step"
    }
}
