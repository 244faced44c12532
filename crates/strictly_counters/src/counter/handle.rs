//! Shared-handle counter and the factory that produces it.
//!
//! A `Counter` is a handle to heap-allocated state, not a value. Cloning
//! the handle aliases the same total; only a fresh factory call owns fresh
//! state.

use super::contracts::{Contract, TickContract};
use super::tick::{Tick, TickError};
use super::types::CounterState;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::instrument;

/// Stateful counter produced by [`make_counter`].
///
/// Each tick adds the counter's step to a private running total and returns
/// the new total. The handle is reference-like:
///
/// - `clone()` produces an alias: both handles observe and mutate a single
///   shared total.
/// - Two counters from two separate factory calls never affect each other.
/// - The state lives until the last handle (or closure holding one) drops.
///
/// The handle is `Rc`-based and neither `Send` nor `Sync`, so cross-thread
/// use of a single counter is rejected at compile time instead of locked.
#[derive(Debug, Clone)]
pub struct Counter {
    state: Rc<RefCell<CounterState>>,
}

impl Counter {
    /// Creates a counter that advances by `step` on every tick.
    ///
    /// Any `i64` step is valid: positive counts up, negative counts down,
    /// zero stays at zero.
    #[instrument]
    pub fn new(step: i64) -> Self {
        Self {
            state: Rc::new(RefCell::new(CounterState::new(step))),
        }
    }

    /// Advances the counter by its step and returns the new total.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (WithinRange)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`TickError::Overflow`] if the new total would leave the
    /// `i64` range. The counter is left unchanged in that case.
    #[instrument(skip(self), fields(step = self.step(), total = self.total()))]
    pub fn tick(&self) -> Result<i64, TickError> {
        let mut state = self.state.borrow_mut();

        // Precondition: Check contract
        TickContract::pre(&state)?;

        // Store state for postcondition checking
        #[cfg(debug_assertions)]
        let before = state.clone();

        // Apply tick
        let total = state.apply_tick();

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        TickContract::post(&before, &state)?;

        Ok(total)
    }

    /// Returns the step applied on every tick.
    pub fn step(&self) -> i64 {
        self.state.borrow().step()
    }

    /// Returns the current running total without advancing.
    pub fn total(&self) -> i64 {
        self.state.borrow().total()
    }

    /// Returns how many times this counter has been ticked.
    pub fn ticks(&self) -> usize {
        self.state.borrow().ticks()
    }

    /// Returns an owned copy of the current state, history included.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> CounterState {
        self.state.borrow().clone()
    }

    /// Adapts the handle into the closure form of the same counter.
    ///
    /// The closure owns a handle, so the captured state lives for as long
    /// as the closure does - it may escape the scope that created the
    /// counter. Clones of the handle taken before the adaptation still
    /// share the same total.
    pub fn into_closure(self) -> impl FnMut() -> Result<i64, TickError> {
        move || self.tick()
    }

    /// Reconstructs a counter by re-applying a recorded history.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::TraceMismatch`] if the history is not a valid
    /// trace for `step`, or [`TickError::Overflow`] if replay leaves the
    /// `i64` range.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn replay(step: i64, history: &[Tick]) -> Result<Self, TickError> {
        let counter = Counter::new(step);

        for tick in history {
            let expected = counter.tick()?;

            if tick.total() != expected {
                return Err(TickError::TraceMismatch {
                    recorded: tick.total(),
                    expected,
                });
            }
        }

        Ok(counter)
    }
}

/// Creates an independent counter that adds `step` on every tick.
///
/// Each call owns fresh state: counters from separate calls never interfere.
#[instrument]
pub fn make_counter(step: i64) -> Counter {
    Counter::new(step)
}
