//! Core domain types for counters.

use super::tick::Tick;
use serde::{Deserialize, Serialize};

/// Owned state of a single counter.
///
/// The step is fixed at creation; the total starts at zero and every
/// invocation is recorded in the history so that invariants can verify the
/// state by replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Amount added on every tick (immutable after creation).
    step: i64,
    /// Running total.
    total: i64,
    /// Tick history in invocation order.
    history: Vec<Tick>,
}

impl CounterState {
    /// Creates fresh state for a counter that advances by `step`.
    pub fn new(step: i64) -> Self {
        Self {
            step,
            total: 0,
            history: Vec::new(),
        }
    }

    /// Returns the step applied on every tick.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns the current running total.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Returns how many times the counter has been ticked.
    pub fn ticks(&self) -> usize {
        self.history.len()
    }

    /// Returns the tick history.
    pub fn history(&self) -> &[Tick] {
        &self.history
    }

    /// Applies a tick (unchecked - use Counter::tick for validation).
    pub(super) fn apply_tick(&mut self) -> i64 {
        self.total += self.step;
        self.history.push(Tick::new(self.total));
        self.total
    }

    /// Assembles state from raw parts.
    ///
    /// Bypasses normal construction, so the result may violate invariants.
    /// Used by corruption tests and verification harnesses.
    #[cfg(any(test, kani))]
    pub(super) fn from_parts(step: i64, total: i64, history: Vec<Tick>) -> Self {
        Self {
            step,
            total,
            history,
        }
    }
}
