//! PWM output for the roof lantern
//!
//! Drives channel A of one PWM slice. The counter wraps at 254, so a
//! compare value of 255 keeps the output high for the whole period and
//! the 8-bit intensity maps straight onto the compare register.

use embassy_rp::pwm::{Config, Pwm};
use lantern_hal::PwmOutput;

/// Counter wrap value (period is `PWM_TOP + 1` counts)
pub const PWM_TOP: u16 = 254;

/// Roof lantern PWM channel
pub struct RoofPwm<'d> {
    pwm: Pwm<'d>,
    config: Config,
    duty: u8,
    enabled: bool,
}

impl<'d> RoofPwm<'d> {
    /// Take over a PWM slice set up on channel A
    ///
    /// The slice is reprogrammed immediately into the off state: counter
    /// stopped, compare 0.
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.enable = false;

        let mut roof = Self {
            pwm,
            config,
            duty: 0,
            enabled: false,
        };
        roof.apply();
        roof
    }

    /// Write the cached register values to the slice
    fn apply(&mut self) {
        // A stopped counter freezes the pin level, so compare is forced to
        // 0 while disabled to rest the pin low.
        self.config.compare_a = if self.enabled { self.duty as u16 } else { 0 };
        self.config.enable = self.enabled;
        self.pwm.set_config(&self.config);
    }
}

impl PwmOutput for RoofPwm<'_> {
    fn enable(&mut self) {
        self.enabled = true;
        self.apply();
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.apply();
    }

    fn set_duty(&mut self, duty: u8) {
        if duty == self.duty {
            return;
        }
        self.duty = duty;
        if self.enabled {
            self.apply();
        }
    }

    fn duty(&self) -> u8 {
        self.duty
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
