//! Touch sensor wake source
//!
//! The touch input's GPIO interrupt is what ends an idle sleep. Awaiting
//! the input enables the interrupt for the configured condition; the
//! interrupt handler only wakes the executor.

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use lantern_core::config::{WakeConfig, WakeTrigger};
use lantern_hal::WakeSource;

/// Touch input wake source
pub struct TouchWake<'d> {
    input: Input<'d>,
    trigger: WakeTrigger,
}

impl<'d> TouchWake<'d> {
    /// Configure `pin` as the touch input
    pub fn new<P: Pin>(pin: Peri<'d, P>, config: WakeConfig) -> Self {
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        Self {
            input: Input::new(pin, pull),
            trigger: config.trigger,
        }
    }
}

impl WakeSource for TouchWake<'_> {
    /// Nothing to do up front
    ///
    /// embassy-rp arms the GPIO interrupt for the trigger condition when
    /// the wait future is first polled, and disarms it once it completes.
    fn arm(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Touch wake armed ({})", self.trigger);
    }

    async fn wait_for_wake(&mut self) {
        match self.trigger {
            WakeTrigger::LowLevel => self.input.wait_for_low().await,
            WakeTrigger::FallingEdge => self.input.wait_for_falling_edge().await,
            WakeTrigger::RisingEdge => self.input.wait_for_rising_edge().await,
            WakeTrigger::AnyEdge => self.input.wait_for_any_edge().await,
        }
        #[cfg(feature = "defmt")]
        defmt::info!("Touch wake");
    }
}
