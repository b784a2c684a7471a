//! Sleep/wake session control
//!
//! Defines the two-state session machine and the loop that drives one
//! sleep, wake, breathe, sleep cycle after another.

pub mod machine;
pub mod runner;

pub use machine::{SessionEvent, SessionState};
pub use runner::{Lantern, SessionLoop, SessionReport};
