//! Spin module
//!
//! The slot-machine style randomizer: a two-state engine driven by a single
//! repeating timer.

mod repeating_timer;
mod selection_engine;

pub use repeating_timer::{RepeatingTimer, TimerHandle};
pub use selection_engine::{IDLE_PLACEHOLDER, SPIN_PERIOD, SelectionEngine, SpinState, Transition};
