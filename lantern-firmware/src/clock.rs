//! Millisecond clock fed by SysTick

use cortex_m_rt::exception;
use lantern_core::clock::MillisCounter;

/// Milliseconds since SysTick was started
pub static MILLIS: MillisCounter = MillisCounter::new();

#[exception]
fn SysTick() {
    MILLIS.tick();
}
