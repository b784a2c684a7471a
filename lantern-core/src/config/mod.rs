//! Configuration types
//!
//! Board-agnostic configuration structures, embedded at build time.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
