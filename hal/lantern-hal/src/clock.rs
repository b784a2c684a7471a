//! Millisecond time source

/// Monotonic millisecond clock
///
/// Readings are non-decreasing except for unsigned wraparound, which
/// happens after roughly 49.7 days. Callers compare readings with
/// wrapping subtraction so a wrap inside a session stays harmless.
pub trait Clock {
    /// Milliseconds since the clock started
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since an earlier reading
    fn elapsed_since(&self, earlier_ms: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier_ms)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Control over the periodic interrupt that feeds a [`Clock`]
///
/// Pausing stops the interrupt without touching the count, so the clock
/// stands still while paused and stays monotonic across a pause.
pub trait TickControl {
    /// Stop the tick interrupt
    fn pause(&mut self);

    /// Restart the tick interrupt
    fn resume(&mut self);
}
