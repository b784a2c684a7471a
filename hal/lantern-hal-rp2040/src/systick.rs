//! 1 ms SysTick
//!
//! SysTick is free on the RP2040 (the embassy time driver runs on the
//! TIMER peripheral), so it is dedicated to the millisecond counter. The
//! firmware's `SysTick` exception handler calls `MillisCounter::tick`.
//!
//! The tick is paused for idle sleeps through [`TickControl`], which keeps
//! the core asleep until the touch interrupt.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use lantern_hal::TickControl;

/// Largest SysTick reload value (24-bit counter)
const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Reload value for a 1 kHz tick from a `sys_hz` core clock
pub const fn reload_for(sys_hz: u32) -> u32 {
    let reload = (sys_hz / 1000).saturating_sub(1);
    if reload > MAX_RELOAD {
        MAX_RELOAD
    } else {
        reload
    }
}

/// SysTick configured as the millisecond tick
pub struct SysTickMillis {
    syst: SYST,
}

impl SysTickMillis {
    /// Start SysTick firing once per millisecond
    pub fn start(mut syst: SYST, sys_hz: u32) -> Self {
        syst.disable_counter();
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(reload_for(sys_hz));

        let mut tick = Self { syst };
        tick.resume();

        #[cfg(feature = "defmt")]
        defmt::info!("SysTick: 1 ms tick from {} Hz core clock", sys_hz);
        tick
    }
}

impl TickControl for SysTickMillis {
    fn pause(&mut self) {
        self.syst.disable_interrupt();
        self.syst.disable_counter();
        #[cfg(feature = "defmt")]
        defmt::trace!("SysTick paused");
    }

    fn resume(&mut self) {
        self.syst.clear_current();
        self.syst.enable_interrupt();
        self.syst.enable_counter();
        #[cfg(feature = "defmt")]
        defmt::trace!("SysTick resumed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_for() {
        assert_eq!(reload_for(125_000_000), 124_999);
        assert_eq!(reload_for(12_000_000), 11_999);
        assert_eq!(reload_for(0), 0);
        assert_eq!(reload_for(u32::MAX), MAX_RELOAD);
    }
}
