mod contracts;
mod handle;
mod tick;
mod types;

pub mod invariants;

#[cfg(kani)]
mod kani_support;

pub use contracts::{Contract, TickContract, WithinRange};
pub use handle::{make_counter, Counter};
pub use tick::{Tick, TickError};
pub use types::CounterState;
