//! First-class tick events for counters.
//!
//! Ticks are domain events, not side effects. Each one records what a
//! single invocation produced and can be serialized for replay.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One invocation of a counter: the running total it produced.
///
/// Ticks are first-class domain events that can be:
/// - Serialized for replay
/// - Logged for debugging
/// - Reasoned about by invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tick {
    /// Running total immediately after this invocation.
    pub total: i64,
}

impl Tick {
    /// Creates a new tick event.
    #[instrument]
    pub fn new(total: i64) -> Self {
        Self { total }
    }

    /// Returns the total this tick produced.
    pub fn total(&self) -> i64 {
        self.total
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-> {}", self.total)
    }
}

/// Error that can occur when validating or applying a tick.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TickError {
    /// Advancing the total would leave the `i64` range.
    #[display("Adding step {step} to total {total} overflows i64")]
    Overflow {
        /// Total the counter held when the tick was rejected.
        total: i64,
        /// Step that could not be applied.
        step: i64,
    },

    /// A replayed history is not a valid trace for the counter's step.
    #[display("Recorded total {recorded} does not match expected {expected}")]
    TraceMismatch {
        /// Total the history claims this tick produced.
        recorded: i64,
        /// Total the counter actually produced.
        expected: i64,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for TickError {}
