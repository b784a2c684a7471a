//! Idle sleep and wake-up abstractions
//!
//! The wake source replaces a "do nothing" interrupt handler: its only
//! purpose is to make the sleeping processor resume. The power manager
//! owns the low-power idle itself.

/// External trigger that ends an idle sleep
///
/// Typically a touch sensor on an edge- or level-sensitive GPIO.
#[allow(async_fn_in_trait)]
pub trait WakeSource {
    /// Ready the trigger before the next sleep
    ///
    /// Called before every sleep; there is no explicit disarm. Triggers
    /// that arrive while the source is not being waited on are dropped.
    fn arm(&mut self);

    /// Wait until the trigger fires
    ///
    /// Carries no payload. Returning early (a spurious wake) is always
    /// allowed, callers must tolerate it.
    async fn wait_for_wake(&mut self);
}

/// Low-power idle control
#[allow(async_fn_in_trait)]
pub trait PowerManager {
    /// Idle in the lowest usable power state until `wake` fires
    async fn sleep_until_wake<W: WakeSource>(&mut self, wake: &mut W);
}
