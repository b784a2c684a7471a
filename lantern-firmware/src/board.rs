//! Board pin map and peripheral bring-up
//!
//! # Pin Assignments
//!
//! - **GPIO0**: ROOF - Roof lantern, PWM slice 0 channel A
//! - **GPIO2**: TOUCH - Touch sensor input (pull-up, touch pulls low)
//! - **GPIO4**: INTERIOR - Interior light driver
//!
//! Every other pin is left at its reset state (input, no output drive).

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peripherals;

use lantern_core::config::LanternConfig;
use lantern_hal_rp2040::{InteriorLight, RoofPwm, TouchWake};

/// Lantern hardware, owned by the session loop once built
pub struct Board {
    /// Roof lantern PWM
    pub roof: RoofPwm<'static>,
    /// Interior light
    pub interior: InteriorLight<'static>,
    /// Touch sensor
    pub touch: TouchWake<'static>,
}

impl Board {
    /// Bring up the lantern peripherals
    ///
    /// Both lights come up in the off state: the interior pin is driven
    /// to its "off" level and the PWM counter is stopped at compare 0.
    pub fn new(p: Peripherals, config: &LanternConfig) -> Self {
        let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, PwmConfig::default());

        Self {
            roof: RoofPwm::new(pwm),
            interior: InteriorLight::new(p.PIN_4, config.interior),
            touch: TouchWake::new(p.PIN_2, config.wake),
        }
    }
}
