//! Lantern - Touch-Activated Breathing Light Firmware
//!
//! Main firmware binary for RP2040-based lantern props. The board idles
//! asleep until the touch sensor fires, then the roof lantern breathes on
//! PWM with the interior light on until the session ends.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use lantern_core::config::TimingConfig;
use lantern_core::power::TicklessIdle;
use lantern_core::session::{Lantern, SessionLoop};
use lantern_hal_rp2040::SysTickMillis;

use crate::board::Board;
use crate::clock::MILLIS;

mod board;
mod clock;

mod config {
    include!(concat!(env!("OUT_DIR"), "/lantern_config.rs"));
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lantern firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());

    // Start the 1 ms tick before anything reads the clock
    let core = unwrap!(cortex_m::Peripherals::take());
    let tick = SysTickMillis::start(core.SYST, embassy_rp::clocks::clk_sys_freq());

    let config = config::LANTERN_CONFIG;
    info!("Configuration: {}", config);

    // Also checked by build.rs
    let timing = match config.timing.validate() {
        Ok(()) => config.timing,
        Err(e) => {
            error!("Invalid timing config: {}, using defaults", e);
            TimingConfig::default()
        }
    };

    let board = Board::new(p, &config);
    info!("Peripherals initialized");

    let mut session = unwrap!(SessionLoop::new(
        &MILLIS,
        Lantern::new(board.roof, board.interior),
        board.touch,
        TicklessIdle::new(tick),
        Delay,
        timing,
    ));

    info!(
        "Entering session loop ({} ms nominal session)",
        timing.nominal_session_ms()
    );

    let mut count: u32 = 0;
    session
        .run(|report| {
            count = count.wrapping_add(1);
            info!(
                "Session {} done: {} samples, {} phases, peak {}, {} ms",
                count,
                report.samples,
                report.completed_phases,
                report.peak_intensity,
                report.elapsed_ms
            );
            debug!("Session report: {}", report);
        })
        .await
}
