//! Interior light output

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use lantern_core::config::LightConfig;
use lantern_hal::DigitalOutput;

/// Pin level that produces the requested light state
pub const fn level_for(on: bool, active_low: bool) -> Level {
    if on != active_low {
        Level::High
    } else {
        Level::Low
    }
}

/// Interior light on a push-pull GPIO
///
/// The pin starts at the "off" level for the configured polarity.
pub struct InteriorLight<'d> {
    pin: Output<'d>,
    active_low: bool,
    on: bool,
}

impl<'d> InteriorLight<'d> {
    /// Configure `pin` as the interior light driver
    pub fn new<P: Pin>(pin: Peri<'d, P>, config: LightConfig) -> Self {
        Self {
            pin: Output::new(pin, level_for(false, config.active_low)),
            active_low: config.active_low,
            on: false,
        }
    }
}

impl DigitalOutput for InteriorLight<'_> {
    fn on(&mut self) {
        self.set(true);
    }

    fn off(&mut self) {
        self.set(false);
    }

    fn set(&mut self, on: bool) {
        self.pin.set_level(level_for(on, self.active_low));
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
