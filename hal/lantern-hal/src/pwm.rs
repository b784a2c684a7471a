//! PWM channel abstraction

/// Duty-cycle controlled illumination channel
///
/// Duty is quantized to 8 bits: 0 is dark, 255 is full brightness.
/// While disabled the channel generates no signal and the pin rests low.
pub trait PwmOutput {
    /// Start generating the PWM signal
    fn enable(&mut self);

    /// Stop generating the PWM signal
    fn disable(&mut self);

    /// Set the instantaneous brightness
    fn set_duty(&mut self, duty: u8);

    /// Current duty value
    fn duty(&self) -> u8;

    /// Check if signal generation is running
    fn is_enabled(&self) -> bool;
}
