//! Strictly Counters library - closure-capturing counter factory
//!
//! This library provides a counter factory: [`make_counter`] takes a step
//! amount and produces an independent stateful handle that, each time it is
//! ticked, adds the step to a private running total and returns the new
//! total.
//!
//! # Architecture
//!
//! - **Handle**: [`Counter`] is a cloneable handle over shared heap state.
//!   Cloning aliases the same total; separate factory calls own disjoint
//!   state.
//! - **Events**: every invocation is recorded as a [`Tick`], so histories
//!   can be serialized and replayed.
//! - **Contracts**: state transitions are validated with preconditions
//!   (always) and postconditions (debug builds).
//! - **Invariants**: first-class, independently testable properties of
//!   counter state, composable into sets.
//!
//! # Threading
//!
//! The handle is `Rc`-based and neither `Send` nor `Sync`. Distinct counters
//! share no state; concurrent access to a single counter is rejected by the
//! compiler rather than guarded by locks.
//!
//! # Example
//!
//! ```
//! use strictly_counters::make_counter;
//!
//! # fn main() -> Result<(), strictly_counters::TickError> {
//! let by_ten = make_counter(10);
//! assert_eq!(by_ten.tick()?, 10);
//! assert_eq!(by_ten.tick()?, 20);
//!
//! // A second factory call is fully independent.
//! let by_seven = make_counter(7);
//! assert_eq!(by_seven.tick()?, 7);
//! assert_eq!(by_ten.tick()?, 30);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod counter;

// Crate-level exports - Handle and factory
pub use counter::{make_counter, Counter};

// Crate-level exports - Domain events and errors
pub use counter::{Tick, TickError};

// Crate-level exports - Owned state
pub use counter::CounterState;

// Crate-level exports - Contracts
pub use counter::{Contract, TickContract, WithinRange};

// Crate-level exports - Invariants
pub use counter::invariants::{
    CounterInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicTotalInvariant, UniformStepInvariant,
};
