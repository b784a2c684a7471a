//! Session loop
//!
//! Drives the lantern through one cycle at a time:
//!
//! ```text
//! arm wake ─► sleep ─► (woken) ─► lights on ─► breathe ─► lights off ─┐
//!    ▲                                                                 │
//!    └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lights are switched off by a drop guard, so every way out of a
//! session (effect completion, or the session future being dropped)
//! leaves duty at 0, PWM disabled and the interior light off.

use lantern_hal::{Clock, DelayNs, DigitalOutput, PowerManager, PwmOutput, WakeSource};

use super::machine::{SessionEvent, SessionState};
use crate::config::{ConfigError, TimingConfig};
use crate::effect::{Breath, BreathingEffect, Intensity, Sample, INTENSITY_OFF};

/// The two light channels of the prop
#[derive(Debug)]
pub struct Lantern<P, L> {
    /// Roof lantern (breathing, PWM)
    pub roof: P,
    /// Interior light (steady, on/off)
    pub interior: L,
}

impl<P: PwmOutput, L: DigitalOutput> Lantern<P, L> {
    /// Bundle the light channels
    pub fn new(roof: P, interior: L) -> Self {
        Self { roof, interior }
    }

    /// Put both channels in the defined off state
    pub fn shutdown(&mut self) {
        self.roof.set_duty(INTENSITY_OFF);
        self.roof.disable();
        self.interior.off();
    }

    /// Check both channels are off
    pub fn is_dark(&self) -> bool {
        !self.roof.is_enabled() && self.roof.duty() == INTENSITY_OFF && self.interior.is_off()
    }
}

/// Lights held on for the duration of a session
///
/// Dropping the guard switches everything off.
struct ActiveOutputs<'a, P: PwmOutput, L: DigitalOutput> {
    lantern: &'a mut Lantern<P, L>,
}

impl<'a, P: PwmOutput, L: DigitalOutput> ActiveOutputs<'a, P, L> {
    fn engage(lantern: &'a mut Lantern<P, L>) -> Self {
        lantern.interior.on();
        lantern.roof.set_duty(INTENSITY_OFF);
        lantern.roof.enable();
        Self { lantern }
    }

    fn show(&mut self, intensity: Intensity) {
        self.lantern.roof.set_duty(intensity);
    }
}

impl<P: PwmOutput, L: DigitalOutput> Drop for ActiveOutputs<'_, P, L> {
    fn drop(&mut self) {
        self.lantern.shutdown();
    }
}

/// Summary of one finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionReport {
    /// Samples written to the roof lantern
    pub samples: u32,
    /// Phases run to their configured end
    pub completed_phases: u32,
    /// Highest intensity written
    pub peak_intensity: Intensity,
    /// Roof duty after the lights were switched off
    pub final_intensity: Intensity,
    /// Time spent in per-step delays (ms)
    pub held_ms: u64,
    /// Clock time from wake to lights off (ms)
    pub elapsed_ms: u32,
}

impl SessionReport {
    fn record(&mut self, sample: &Sample) {
        self.samples = self.samples.saturating_add(1);
        self.peak_intensity = self.peak_intensity.max(sample.intensity);
        self.held_ms += sample.hold_ms as u64;
    }
}

/// Sleep/wake session loop
///
/// Owns every capability the lantern needs. Build it once at startup
/// and call [`SessionLoop::run`] (or [`SessionLoop::cycle`] in a loop).
pub struct SessionLoop<'c, C, P, L, W, M, D> {
    clock: &'c C,
    lantern: Lantern<P, L>,
    wake: W,
    power: M,
    delay: D,
    config: TimingConfig,
    state: SessionState,
    sessions: u32,
}

impl<'c, C, P, L, W, M, D> SessionLoop<'c, C, P, L, W, M, D>
where
    C: Clock,
    P: PwmOutput,
    L: DigitalOutput,
    W: WakeSource,
    M: PowerManager,
    D: DelayNs,
{
    /// Create the loop, validating the timing configuration
    ///
    /// The lights are switched off here so the first sleep starts from a
    /// known state.
    pub fn new(
        clock: &'c C,
        mut lantern: Lantern<P, L>,
        wake: W,
        power: M,
        delay: D,
        config: TimingConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        lantern.shutdown();

        Ok(Self {
            clock,
            lantern,
            wake,
            power,
            delay,
            config,
            state: SessionState::Idle,
            sessions: 0,
        })
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Sessions completed since startup
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// The light channels
    pub fn lantern(&self) -> &Lantern<P, L> {
        &self.lantern
    }

    /// Re-arm the wake source and sleep until it fires
    pub async fn sleep(&mut self) {
        self.wake.arm();
        self.power.sleep_until_wake(&mut self.wake).await;
    }

    /// Run one session to completion
    ///
    /// The wake source is not consulted while the session runs, so further
    /// triggers cannot shorten, restart or extend it.
    pub async fn run_session(&mut self) -> SessionReport {
        self.state = self.state.transition(SessionEvent::Woken);
        debug_assert!(self.state.outputs_allowed());
        let started_ms = self.clock.now_ms();
        let mut report = SessionReport::default();

        {
            let mut outputs = ActiveOutputs::engage(&mut self.lantern);
            let mut breath = Breath::start(&self.config, self.clock);

            for sample in breath.by_ref() {
                outputs.show(sample.intensity);
                report.record(&sample);
                if sample.hold_ms > 0 {
                    self.delay.delay_ms(sample.hold_ms).await;
                }
            }
            report.completed_phases = breath.completed_phases();
        }

        report.final_intensity = self.lantern.roof.duty();
        report.elapsed_ms = self.clock.elapsed_since(started_ms);
        self.state = self.state.transition(SessionEvent::EffectComplete);
        self.sessions = self.sessions.wrapping_add(1);
        report
    }

    /// Sleep, then run the session that follows the wake
    ///
    /// The next cycle re-arms the wake source straight away.
    pub async fn cycle(&mut self) -> SessionReport {
        self.sleep().await;
        self.run_session().await
    }

    /// Cycle forever, handing each session's report to `on_report`
    pub async fn run(&mut self, mut on_report: impl FnMut(&SessionReport)) -> ! {
        loop {
            let report = self.cycle().await;
            on_report(&report);
        }
    }
}
