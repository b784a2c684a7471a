//! Hardware configuration types
//!
//! These types describe how the touch sensor and the interior light are
//! wired. Pin numbers themselves belong to the board definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{ConfigError, TimingConfig};

/// Condition on the touch input that wakes the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WakeTrigger {
    /// Input held low (reference wiring: touch pulls the line down)
    #[default]
    LowLevel,
    /// High-to-low transition
    FallingEdge,
    /// Low-to-high transition
    RisingEdge,
    /// Any transition
    AnyEdge,
}

/// Touch sensor wake configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WakeConfig {
    /// Trigger condition
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger: WakeTrigger,
    /// Enable the internal pull-up on the touch input
    #[cfg_attr(feature = "serde", serde(default = "default_pull_up"))]
    pub pull_up: bool,
}

#[cfg(feature = "serde")]
fn default_pull_up() -> bool {
    true
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            trigger: WakeTrigger::LowLevel,
            pull_up: true,
        }
    }
}

/// Interior light driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightConfig {
    /// Light is lit when the pin is driven low
    #[cfg_attr(feature = "serde", serde(default))]
    pub active_low: bool,
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LanternConfig {
    /// Breathing strategy and timing constants
    pub timing: TimingConfig,
    /// Touch sensor wake-up
    #[cfg_attr(feature = "serde", serde(default))]
    pub wake: WakeConfig,
    /// Interior light output
    #[cfg_attr(feature = "serde", serde(default))]
    pub interior: LightConfig,
}

impl LanternConfig {
    /// Validate the configuration
    pub const fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()
    }
}
