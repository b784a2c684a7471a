//! Step-interpolated breathing
//!
//! Walks `charge_steps` samples up and `discharge_steps` samples down,
//! `loops` times. Every sample asks the session to wait the phase's
//! per-step delay after applying it, so the effect never reads a clock.

use core::iter::FusedIterator;

use super::{lerp, to_intensity, BreathingEffect, Phase, Sample, INTENSITY_FULL};
use crate::config::StepConfig;

/// Step-driven breathing effect
#[derive(Debug, Clone)]
pub struct StepInterpolated {
    config: StepConfig,
    phase: Phase,
    /// Next step index within the current phase
    step: u32,
    loops_remaining: u32,
    completed_phases: u32,
}

impl StepInterpolated {
    /// Start the effect at the first charging step
    pub fn start(config: StepConfig) -> Self {
        Self {
            config,
            phase: Phase::Charging,
            step: 0,
            loops_remaining: config.loops,
            completed_phases: 0,
        }
    }

    /// Repetitions not yet finished, including the current one
    pub fn loops_remaining(&self) -> u32 {
        self.loops_remaining
    }

    /// Close the current phase and move to the next
    fn finish_phase(&mut self) {
        self.step = 0;
        self.completed_phases += 1;
        if self.phase == Phase::Discharging {
            self.loops_remaining -= 1;
        }
        self.phase = self.phase.toggled();
    }
}

impl Iterator for StepInterpolated {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        while self.loops_remaining > 0 {
            let steps = self.config.steps(self.phase);
            if self.step < steps {
                let step = self.step;
                self.step += 1;

                let rising = to_intensity(lerp(
                    step as i64,
                    0,
                    steps as i64,
                    0,
                    INTENSITY_FULL as i64,
                ));
                return Some(Sample {
                    phase: self.phase,
                    intensity: self.phase.shape(rising),
                    hold_ms: self.config.delay_ms(self.phase),
                });
            }
            self.finish_phase();
        }
        None
    }
}

impl FusedIterator for StepInterpolated {}

impl BreathingEffect for StepInterpolated {
    fn completed_phases(&self) -> u32 {
        self.completed_phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_reference_session() {
        let mut effect = StepInterpolated::start(StepConfig::default());
        let samples: Vec<Sample> = effect.by_ref().collect();

        assert_eq!(samples.len(), 5 * (200 + 200));
        let waited: u64 = samples.iter().map(|s| s.hold_ms as u64).sum();
        assert_eq!(waited, 20_000);
        assert_eq!(effect.completed_phases(), 10);
        assert_eq!(effect.loops_remaining(), 0);
    }

    #[test]
    fn test_phase_boundaries() {
        let samples: Vec<Sample> = StepInterpolated::start(StepConfig::default()).collect();

        for lap in samples.chunks(400) {
            // Charging: step 0 is dark, step 199 is the last before the turn
            assert_eq!(lap[0].phase, Phase::Charging);
            assert_eq!(lap[0].intensity, 0);
            assert_eq!(lap[199].phase, Phase::Charging);
            assert_eq!(lap[199].intensity, 253);

            // The 199 -> 200 transition reaches full brightness
            assert_eq!(lap[200].phase, Phase::Discharging);
            assert_eq!(lap[200].intensity, 255);
            assert_eq!(lap[399].phase, Phase::Discharging);
            assert_eq!(lap[399].intensity, 2);
        }
    }

    #[test]
    fn test_hold_follows_phase() {
        let config = StepConfig {
            charge_steps: 3,
            discharge_steps: 2,
            charge_delay_ms: 7,
            discharge_delay_ms: 11,
            loops: 2,
        };
        let holds: Vec<(Phase, u32)> = StepInterpolated::start(config)
            .map(|s| (s.phase, s.hold_ms))
            .collect();

        assert_eq!(
            holds,
            [
                (Phase::Charging, 7),
                (Phase::Charging, 7),
                (Phase::Charging, 7),
                (Phase::Discharging, 11),
                (Phase::Discharging, 11),
                (Phase::Charging, 7),
                (Phase::Charging, 7),
                (Phase::Charging, 7),
                (Phase::Discharging, 11),
                (Phase::Discharging, 11),
            ]
        );
    }

    #[test]
    fn test_single_step_phases() {
        let config = StepConfig {
            charge_steps: 1,
            discharge_steps: 1,
            charge_delay_ms: 1,
            discharge_delay_ms: 1,
            loops: 3,
        };
        let values: Vec<u8> = StepInterpolated::start(config)
            .map(|s| s.intensity)
            .collect();
        assert_eq!(values, [0, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn test_zero_steps_never_divides() {
        // Rejected by validation, but must still terminate cleanly
        let config = StepConfig {
            charge_steps: 0,
            discharge_steps: 0,
            ..Default::default()
        };
        let mut effect = StepInterpolated::start(config);
        assert_eq!(effect.next(), None);
        assert_eq!(effect.completed_phases(), 10);
    }
}
