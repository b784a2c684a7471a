//! Time-interpolated breathing
//!
//! Each poll reads the clock and places the sample on a straight line
//! between the start and finish of the current phase:
//!
//! ```text
//! intensity = 255 * (now - start) / (finish - start)     (Charging)
//! intensity = 255 - 255 * (now - start) / (finish - start) (Discharging)
//! ```
//!
//! The phase toggles on the first poll strictly after `finish`, so a
//! sample taken exactly at the boundary still belongs to the ending
//! phase. The next phase starts at the old `finish`, not at the poll
//! time, which keeps the breathing period exact however the polls fall.
//!
//! All comparisons use wrapping subtraction from an anchor, so a counter
//! wrap inside a session does not disturb the effect.

use core::iter::FusedIterator;

use lantern_hal::Clock;

use super::{BreathingEffect, Intensity, Phase, Sample, INTENSITY_FULL};
use crate::config::TimeConfig;

/// Rising ramp value after `elapsed_ms` of a `duration_ms` phase
///
/// Elapsed time past the end of the phase is clamped, so the result is
/// always in `0..=255`. A zero duration (rejected by config validation)
/// reads as an already finished ramp.
pub fn ramp(elapsed_ms: u32, duration_ms: u32) -> Intensity {
    if duration_ms == 0 {
        return INTENSITY_FULL;
    }
    let elapsed = elapsed_ms.min(duration_ms) as u64;
    (INTENSITY_FULL as u64 * elapsed / duration_ms as u64) as Intensity
}

/// Clock-driven breathing effect
#[derive(Debug)]
pub struct TimeInterpolated<'c, C> {
    clock: &'c C,
    config: TimeConfig,
    /// Clock reading when the session started
    session_start_ms: u32,
    phase: Phase,
    /// Clock reading when the current phase started
    phase_start_ms: u32,
    completed_phases: u32,
    finished: bool,
}

impl<'c, C: Clock> TimeInterpolated<'c, C> {
    /// Start the effect now, in the charging phase
    pub fn start(clock: &'c C, config: TimeConfig) -> Self {
        let now = clock.now_ms();
        Self {
            clock,
            config,
            session_start_ms: now,
            phase: Phase::Charging,
            phase_start_ms: now,
            completed_phases: 0,
            finished: false,
        }
    }

    /// Clock reading at session start
    pub fn session_start_ms(&self) -> u32 {
        self.session_start_ms
    }

    /// Check whether the session is over
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance the phase if `now` is past the current phase's finish
    ///
    /// At most one toggle per poll.
    fn update_phase(&mut self, now: u32) {
        let duration = self.config.duration_ms(self.phase);
        if now.wrapping_sub(self.phase_start_ms) > duration {
            self.phase_start_ms = self.phase_start_ms.wrapping_add(duration);
            self.phase = self.phase.toggled();
            self.completed_phases += 1;
        }
    }
}

impl<C: Clock> Iterator for TimeInterpolated<'_, C> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.finished {
            return None;
        }

        let now = self.clock.now_ms();
        self.update_phase(now);

        if now.wrapping_sub(self.session_start_ms) > self.config.on_ms {
            self.finished = true;
            return None;
        }

        let duration = self.config.duration_ms(self.phase);
        let rising = ramp(now.wrapping_sub(self.phase_start_ms), duration);

        Some(Sample {
            phase: self.phase,
            intensity: self.phase.shape(rising),
            hold_ms: 0,
        })
    }
}

impl<C: Clock> FusedIterator for TimeInterpolated<'_, C> {}

impl<C: Clock> BreathingEffect for TimeInterpolated<'_, C> {
    fn completed_phases(&self) -> u32 {
        self.completed_phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MillisCounter;
    use std::vec::Vec;

    fn config(charge_ms: u32, discharge_ms: u32, on_ms: u32) -> TimeConfig {
        TimeConfig {
            debounce_ms: 0,
            charge_ms,
            discharge_ms,
            on_ms,
        }
    }

    fn advance(clock: &MillisCounter, ms: u32) {
        for _ in 0..ms {
            clock.tick();
        }
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp(0, 2000), 0);
        assert_eq!(ramp(1000, 2000), 127);
        assert_eq!(ramp(2000, 2000), 255);
        // Late polls are clamped
        assert_eq!(ramp(5000, 2000), 255);
        assert_eq!(ramp(7, 0), 255);
    }

    #[test]
    fn test_starts_dark_and_charging() {
        let clock = MillisCounter::starting_at(500);
        let mut effect = TimeInterpolated::start(&clock, config(2000, 2000, 20_000));

        let sample = effect.next().unwrap();
        assert_eq!(sample.phase, Phase::Charging);
        assert_eq!(sample.intensity, 0);
        assert_eq!(sample.hold_ms, 0);
        assert_eq!(effect.session_start_ms(), 500);
    }

    #[test]
    fn test_boundary_belongs_to_ending_phase() {
        let clock = MillisCounter::new();
        let mut effect = TimeInterpolated::start(&clock, config(2000, 2000, 20_000));

        advance(&clock, 2000);
        let at_boundary = effect.next().unwrap();
        assert_eq!(at_boundary.phase, Phase::Charging);
        assert_eq!(at_boundary.intensity, 255);
        assert_eq!(effect.completed_phases(), 0);

        advance(&clock, 1);
        let after = effect.next().unwrap();
        assert_eq!(after.phase, Phase::Discharging);
        assert_eq!(after.intensity, 255);
        assert_eq!(effect.completed_phases(), 1);
    }

    #[test]
    fn test_discharge_ramps_down() {
        let clock = MillisCounter::new();
        let mut effect = TimeInterpolated::start(&clock, config(1000, 2000, 20_000));

        advance(&clock, 1001);
        assert_eq!(effect.next().unwrap().phase, Phase::Discharging);

        // Discharge started at t=1000, halfway at t=2000
        advance(&clock, 999);
        let half = effect.next().unwrap();
        assert_eq!(half.phase, Phase::Discharging);
        assert_eq!(half.intensity, 255 - 127);

        advance(&clock, 1000);
        let end = effect.next().unwrap();
        assert_eq!(end.intensity, 0);
    }

    #[test]
    fn test_reference_session_toggles_ten_times() {
        let clock = MillisCounter::new();
        let mut effect = TimeInterpolated::start(&clock, config(2000, 2000, 20_000));

        let mut toggles = 0;
        let mut last_phase = Phase::Charging;
        let mut polls = 0u32;
        loop {
            match effect.next() {
                Some(sample) => {
                    if sample.phase != last_phase {
                        toggles += 1;
                        last_phase = sample.phase;
                    }
                    polls += 1;
                    clock.tick();
                }
                None => break,
            }
        }

        // Nine toggles are visible in samples, the tenth closes the
        // final discharge on the poll that ends the session.
        assert_eq!(toggles, 9);
        assert_eq!(effect.completed_phases(), 10);
        assert!(clock.elapsed_since(effect.session_start_ms()) >= 20_000);
        assert_eq!(polls, 20_001);
        assert!(effect.is_finished());
        assert_eq!(effect.next(), None);
    }

    #[test]
    fn test_survives_counter_wrap() {
        let from_zero = MillisCounter::new();
        let near_wrap = MillisCounter::starting_at(u32::MAX - 3000);
        let cfg = config(700, 900, 5000);

        let collect = |clock: &MillisCounter| {
            let mut effect = TimeInterpolated::start(clock, cfg);
            let mut values = Vec::new();
            while let Some(sample) = effect.next() {
                values.push(sample.intensity);
                clock.tick();
            }
            (values, effect.completed_phases())
        };

        assert_eq!(collect(&from_zero), collect(&near_wrap));
    }

    #[test]
    fn test_late_poll_stays_in_range() {
        let clock = MillisCounter::new();
        let mut effect = TimeInterpolated::start(&clock, config(100, 100, 10_000));

        // Jump far past several phase ends in one poll
        advance(&clock, 450);
        let sample = effect.next().unwrap();
        assert_eq!(sample.phase, Phase::Discharging);
        assert_eq!(sample.intensity, 0);
        assert_eq!(effect.completed_phases(), 1);
    }
}
