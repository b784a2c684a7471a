//! Digital output abstraction
//!
//! Provides the on/off light channel that chip-specific HALs implement
//! on top of a GPIO pin.

/// Binary light output
///
/// Implementations handle pin polarity, so `on()` always means the light
/// is lit regardless of whether the driver is active-high or active-low.
pub trait DigitalOutput {
    /// Turn the light on
    fn on(&mut self);

    /// Turn the light off
    fn off(&mut self);

    /// Set the light to a specific state
    fn set(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }

    /// Check if the light is currently on
    fn is_on(&self) -> bool;

    /// Check if the light is currently off
    fn is_off(&self) -> bool {
        !self.is_on()
    }
}
