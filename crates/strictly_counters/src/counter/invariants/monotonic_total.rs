//! Monotonic total invariant: totals never move against the step's sign.

use super::super::types::CounterState;
use super::Invariant;

/// Invariant: Recorded totals are monotonic in the direction of the step.
///
/// With a non-negative step the totals never decrease; with a non-positive
/// step they never increase. A zero step satisfies both readings.
pub struct MonotonicTotalInvariant;

impl Invariant<CounterState> for MonotonicTotalInvariant {
    fn holds(state: &CounterState) -> bool {
        let mut previous = 0i64;

        for tick in state.history() {
            let current = tick.total();

            if state.step() >= 0 && current < previous {
                return false;
            }

            if state.step() <= 0 && current > previous {
                return false;
            }

            previous = current;
        }

        true
    }

    fn description() -> &'static str {
        "Totals never move against the sign of the step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::tick::Tick;
    use crate::counter::Counter;

    #[test]
    fn test_empty_history_holds() {
        let state = CounterState::new(1);
        assert!(MonotonicTotalInvariant::holds(&state));
    }

    #[test]
    fn test_positive_step_holds() {
        let counter = Counter::new(10);
        for _ in 0..3 {
            counter.tick().expect("Valid tick");
        }

        assert!(MonotonicTotalInvariant::holds(&counter.snapshot()));
    }

    #[test]
    fn test_negative_step_holds() {
        let counter = Counter::new(-2);
        for _ in 0..3 {
            counter.tick().expect("Valid tick");
        }

        assert!(MonotonicTotalInvariant::holds(&counter.snapshot()));
    }

    #[test]
    fn test_zero_step_holds() {
        let counter = Counter::new(0);
        for _ in 0..3 {
            counter.tick().expect("Valid tick");
        }

        assert!(MonotonicTotalInvariant::holds(&counter.snapshot()));
    }

    #[test]
    fn test_regressing_total_violates() {
        // Positive step, but the second total moved backwards
        let state = CounterState::from_parts(10, 5, vec![Tick::new(10), Tick::new(5)]);

        assert!(!MonotonicTotalInvariant::holds(&state));
    }

    #[test]
    fn test_rising_total_with_negative_step_violates() {
        let state = CounterState::from_parts(-5, 5, vec![Tick::new(-5), Tick::new(5)]);

        assert!(!MonotonicTotalInvariant::holds(&state));
    }
}
