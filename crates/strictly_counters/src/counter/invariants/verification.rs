//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL reachable counter states (bounded).

#[cfg(kani)]
mod proofs {
    use crate::counter::types::CounterState;
    use crate::{CounterInvariants, InvariantSet};

    /// Verify the full invariant set holds for all reachable states.
    ///
    /// Proves: states built through apply_tick always satisfy the
    /// uniform-step, monotonic-total, and history-consistency invariants.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_reachable_states_uphold_invariants() {
        let step: i64 = kani::any();
        kani::assume(step >= -1024 && step <= 1024); // Small bound for speed

        let ticks: usize = kani::any();
        kani::assume(ticks <= 4);

        let mut state = CounterState::new(step);
        for _ in 0..ticks {
            state.apply_tick();
        }

        assert!(
            CounterInvariants::check_all(&state).is_ok(),
            "Reachable state violated an invariant"
        );
    }

    /// Verify the checkers themselves are total.
    ///
    /// Proves: invariant checking classifies arbitrary (possibly corrupt)
    /// states without panicking - the i128 widening keeps the arithmetic
    /// in range.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_checkers_never_panic() {
        let state: CounterState = kani::any();

        let _ = CounterInvariants::check_all(&state);
    }
}
