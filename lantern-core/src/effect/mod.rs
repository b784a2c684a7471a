//! Breathing effects
//!
//! A breathing effect is a finite stream of [`Sample`]s: intensity ramps
//! from 0 to 255 while [`Phase::Charging`] and back to 0 while
//! [`Phase::Discharging`]. The stream ends when the session is over.
//!
//! Two strategies produce the same shape:
//!
//! - [`TimeInterpolated`] polls a millisecond clock and interpolates on
//!   elapsed time. Samples carry no hold time; the session busy-polls.
//! - [`StepInterpolated`] walks a fixed number of steps per phase and asks
//!   the session to wait a fixed delay after each one.
//!
//! [`Breath`] wraps either one so the session loop can be built from a
//! [`TimingConfig`] chosen at build time.

pub mod step;
pub mod time;

use core::iter::FusedIterator;

use lantern_hal::Clock;

use crate::config::TimingConfig;

pub use step::StepInterpolated;
pub use time::TimeInterpolated;

/// PWM duty value, 0 (dark) to 255 (full)
pub type Intensity = u8;

/// Dark
pub const INTENSITY_OFF: Intensity = 0;

/// Full brightness
pub const INTENSITY_FULL: Intensity = 255;

/// Breathing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Fading up
    #[default]
    Charging,
    /// Fading down
    Discharging,
}

impl Phase {
    /// The other phase
    pub const fn toggled(self) -> Self {
        match self {
            Phase::Charging => Phase::Discharging,
            Phase::Discharging => Phase::Charging,
        }
    }

    /// Turn a rising ramp value into this phase's intensity
    pub const fn shape(self, rising: Intensity) -> Intensity {
        match self {
            Phase::Charging => rising,
            Phase::Discharging => INTENSITY_FULL - rising,
        }
    }
}

/// One output value produced by an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Phase the sample belongs to
    pub phase: Phase,
    /// Duty value to apply
    pub intensity: Intensity,
    /// Wait after applying the sample (ms), 0 for none
    pub hold_ms: u32,
}

/// Linear map of `v` from `[lo0, hi0]` onto `[lo1, hi1]`
///
/// Integer arithmetic, truncating toward zero. `hi0 != lo0` is a caller
/// invariant.
pub const fn lerp(v: i64, lo0: i64, hi0: i64, lo1: i64, hi1: i64) -> i64 {
    (hi1 - lo1) * (v - lo0) / (hi0 - lo0) + lo1
}

/// Clamp an interpolated value into the intensity range
pub fn to_intensity(value: i64) -> Intensity {
    value.clamp(INTENSITY_OFF as i64, INTENSITY_FULL as i64) as Intensity
}

/// A lazy, finite, non-restartable sequence of samples
///
/// `next()` returning `None` is the completion signal; after that the
/// effect keeps returning `None`.
pub trait BreathingEffect: Iterator<Item = Sample> + FusedIterator {
    /// Number of phases that have run to their configured end
    fn completed_phases(&self) -> u32;
}

/// Breathing effect selected by configuration
#[derive(Debug)]
pub enum Breath<'c, C> {
    /// Clock-driven fade
    TimeInterpolated(TimeInterpolated<'c, C>),
    /// Step-driven fade
    StepInterpolated(StepInterpolated),
}

impl<'c, C: Clock> Breath<'c, C> {
    /// Begin a new session's effect
    ///
    /// The time-interpolated strategy reads `clock` immediately to anchor
    /// the session start; the step-interpolated one never reads it.
    pub fn start(timing: &TimingConfig, clock: &'c C) -> Self {
        match *timing {
            TimingConfig::TimeInterpolated(config) => {
                Breath::TimeInterpolated(TimeInterpolated::start(clock, config))
            }
            TimingConfig::StepInterpolated(config) => {
                Breath::StepInterpolated(StepInterpolated::start(config))
            }
        }
    }
}

impl<C: Clock> Iterator for Breath<'_, C> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        match self {
            Breath::TimeInterpolated(effect) => effect.next(),
            Breath::StepInterpolated(effect) => effect.next(),
        }
    }
}

impl<C: Clock> FusedIterator for Breath<'_, C> {}

impl<C: Clock> BreathingEffect for Breath<'_, C> {
    fn completed_phases(&self) -> u32 {
        match self {
            Breath::TimeInterpolated(effect) => effect.completed_phases(),
            Breath::StepInterpolated(effect) => effect.completed_phases(),
        }
    }
}
