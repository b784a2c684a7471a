//! Interrupt-fed millisecond counter
//!
//! A periodic timer interrupt is the only writer; everything else reads
//! through the [`Clock`] trait.

pub use lantern_hal::Clock;
use portable_atomic::{AtomicU32, Ordering};

/// Monotonic millisecond counter
///
/// Place one in a `static` and call [`MillisCounter::tick`] from a 1 ms
/// periodic interrupt. The counter wraps silently after `u32::MAX`.
/// `portable-atomic` keeps the increment atomic on cores without native
/// read-modify-write instructions (Cortex-M0+).
#[derive(Debug)]
pub struct MillisCounter {
    ms: AtomicU32,
}

impl Default for MillisCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter starting at an arbitrary value
    pub const fn starting_at(ms: u32) -> Self {
        Self {
            ms: AtomicU32::new(ms),
        }
    }

    /// Advance the counter by one millisecond
    ///
    /// Must only be called from the periodic timer interrupt.
    pub fn tick(&self) {
        self.ms.fetch_add(1, Ordering::Relaxed);
    }
}

impl Clock for MillisCounter {
    fn now_ms(&self) -> u32 {
        self.ms.load(Ordering::Relaxed)
    }
}
