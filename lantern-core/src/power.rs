//! Idle sleep with the millisecond tick paused
//!
//! The executor idles the core between interrupts. A free-running 1 ms tick
//! would end that idle a thousand times a second, so the tick is paused for
//! the whole sleep and resumed once the wake source fires. The counter
//! stands still while paused; sessions never span a sleep, so effects only
//! ever see a running clock.

use lantern_hal::{PowerManager, TickControl, WakeSource};

/// Tick held paused until dropped
struct PausedTick<'a, T: TickControl> {
    tick: &'a mut T,
}

impl<'a, T: TickControl> PausedTick<'a, T> {
    fn pause(tick: &'a mut T) -> Self {
        tick.pause();
        Self { tick }
    }
}

impl<T: TickControl> Drop for PausedTick<'_, T> {
    fn drop(&mut self) {
        self.tick.resume();
    }
}

/// Power manager that idles with the tick interrupt off
///
/// The tick is resumed on every way out of the sleep, including the sleep
/// future being dropped.
#[derive(Debug)]
pub struct TicklessIdle<T> {
    tick: T,
}

impl<T: TickControl> TicklessIdle<T> {
    /// Take over a running tick source
    pub fn new(tick: T) -> Self {
        Self { tick }
    }
}

impl<T: TickControl> PowerManager for TicklessIdle<T> {
    async fn sleep_until_wake<W: WakeSource>(&mut self, wake: &mut W) {
        let _paused = PausedTick::pause(&mut self.tick);
        wake.wait_for_wake().await;
    }
}
