//! Timing configuration types
//!
//! Timing is fixed at build time. The firmware embeds one
//! [`TimingConfig`] and validates it before the first session.

use core::fmt;

use crate::effect::Phase;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference debounce interval (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Reference fade-up duration (ms)
pub const DEFAULT_CHARGE_MS: u32 = 2000;

/// Reference fade-down duration (ms)
pub const DEFAULT_DISCHARGE_MS: u32 = 2000;

/// Reference session length (ms)
pub const DEFAULT_ON_MS: u32 = 20_000;

/// Reference step count per fade
pub const DEFAULT_STEPS: u32 = 200;

/// Reference delay between steps (ms)
pub const DEFAULT_STEP_DELAY_MS: u32 = 10;

/// Reference number of charge/discharge repetitions
pub const DEFAULT_LOOPS: u32 = 5;

/// Configuration errors found by [`TimingConfig::validate`]
///
/// Every one of these would be a division by zero or an empty session
/// if it reached the effect code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Fade-up duration is zero
    ZeroChargeDuration,
    /// Fade-down duration is zero
    ZeroDischargeDuration,
    /// Session length is zero
    ZeroOnDuration,
    /// Fade-up step count is zero
    ZeroChargeSteps,
    /// Fade-down step count is zero
    ZeroDischargeSteps,
    /// Repetition count is zero
    ZeroLoops,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::ZeroChargeDuration => "charge_ms must be greater than zero",
            ConfigError::ZeroDischargeDuration => "discharge_ms must be greater than zero",
            ConfigError::ZeroOnDuration => "on_ms must be greater than zero",
            ConfigError::ZeroChargeSteps => "charge_steps must be greater than zero",
            ConfigError::ZeroDischargeSteps => "discharge_steps must be greater than zero",
            ConfigError::ZeroLoops => "loops must be greater than zero",
        };
        f.write_str(msg)
    }
}

/// Time-interpolated breathing (polls the millisecond clock)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeConfig {
    /// Touch debounce interval (ms)
    ///
    /// Carried with the other timing constants. The session loop does not
    /// wait on it: the wake source is re-armed as soon as the lights are off.
    pub debounce_ms: u32,
    /// Fade-up duration (ms)
    pub charge_ms: u32,
    /// Fade-down duration (ms)
    pub discharge_ms: u32,
    /// Total session length (ms)
    pub on_ms: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            charge_ms: DEFAULT_CHARGE_MS,
            discharge_ms: DEFAULT_DISCHARGE_MS,
            on_ms: DEFAULT_ON_MS,
        }
    }
}

impl TimeConfig {
    /// Duration of a phase in milliseconds
    pub const fn duration_ms(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Charging => self.charge_ms,
            Phase::Discharging => self.discharge_ms,
        }
    }

    /// Check all durations are usable as divisors
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.charge_ms == 0 {
            return Err(ConfigError::ZeroChargeDuration);
        }
        if self.discharge_ms == 0 {
            return Err(ConfigError::ZeroDischargeDuration);
        }
        if self.on_ms == 0 {
            return Err(ConfigError::ZeroOnDuration);
        }
        Ok(())
    }
}

/// Step-interpolated breathing (fixed steps with a delay after each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepConfig {
    /// Steps in the fade-up
    pub charge_steps: u32,
    /// Steps in the fade-down
    pub discharge_steps: u32,
    /// Delay after each fade-up step (ms)
    pub charge_delay_ms: u32,
    /// Delay after each fade-down step (ms)
    pub discharge_delay_ms: u32,
    /// Number of fade-up/fade-down repetitions per session
    pub loops: u32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            charge_steps: DEFAULT_STEPS,
            discharge_steps: DEFAULT_STEPS,
            charge_delay_ms: DEFAULT_STEP_DELAY_MS,
            discharge_delay_ms: DEFAULT_STEP_DELAY_MS,
            loops: DEFAULT_LOOPS,
        }
    }
}

impl StepConfig {
    /// Step count of a phase
    pub const fn steps(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Charging => self.charge_steps,
            Phase::Discharging => self.discharge_steps,
        }
    }

    /// Per-step delay of a phase in milliseconds
    pub const fn delay_ms(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Charging => self.charge_delay_ms,
            Phase::Discharging => self.discharge_delay_ms,
        }
    }

    /// Total time spent waiting between steps in one session (ms)
    pub const fn total_delay_ms(&self) -> u64 {
        let charge = self.charge_steps as u64 * self.charge_delay_ms as u64;
        let discharge = self.discharge_steps as u64 * self.discharge_delay_ms as u64;
        self.loops as u64 * (charge + discharge)
    }

    /// Check all step counts are usable as divisors
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.charge_steps == 0 {
            return Err(ConfigError::ZeroChargeSteps);
        }
        if self.discharge_steps == 0 {
            return Err(ConfigError::ZeroDischargeSteps);
        }
        if self.loops == 0 {
            return Err(ConfigError::ZeroLoops);
        }
        Ok(())
    }
}

/// Breathing strategy and its constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TimingConfig {
    /// Intensity follows the millisecond clock
    TimeInterpolated(TimeConfig),
    /// Intensity follows a step counter paced by a delay
    StepInterpolated(StepConfig),
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig::TimeInterpolated(TimeConfig::default())
    }
}

impl TimingConfig {
    /// Check the configuration can drive a session
    pub const fn validate(&self) -> Result<(), ConfigError> {
        match self {
            TimingConfig::TimeInterpolated(time) => time.validate(),
            TimingConfig::StepInterpolated(step) => step.validate(),
        }
    }

    /// Expected length of one session (ms)
    pub const fn nominal_session_ms(&self) -> u64 {
        match self {
            TimingConfig::TimeInterpolated(time) => time.on_ms as u64,
            TimingConfig::StepInterpolated(step) => step.total_delay_ms(),
        }
    }
}
