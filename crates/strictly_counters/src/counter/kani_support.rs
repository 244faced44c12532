//! Kani arbitrary implementations for counter types.
//!
//! These implementations allow Kani to explore all possible values of our
//! types during model checking.

use super::tick::Tick;
use super::types::CounterState;

impl kani::Arbitrary for Tick {
    fn any() -> Self {
        Tick::new(kani::any())
    }
}

impl kani::Arbitrary for CounterState {
    fn any() -> Self {
        let step: i64 = kani::any();
        let total: i64 = kani::any();

        // Generate a bounded history
        let history_len: usize = kani::any();
        kani::assume(history_len <= 4);

        let mut history = Vec::with_capacity(history_len);
        for _ in 0..history_len {
            history.push(kani::any());
        }

        // Note: This bypasses normal construction, allowing Kani to explore invalid states
        CounterState::from_parts(step, total, history)
    }
}
