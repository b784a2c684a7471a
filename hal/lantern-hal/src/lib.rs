//! Lantern Hardware Abstraction Layer
//!
//! This crate defines the capability traits the board-agnostic core
//! consumes. Chip-specific HALs (RP2040 today) implement them once at
//! startup and hand the instances to the session loop.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (lantern-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lantern-core (effects, session loop)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lantern-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ lantern-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::Clock`] - Monotonic millisecond counter
//! - [`clock::TickControl`] - Pause and resume the counter's tick interrupt
//! - [`pwm::PwmOutput`] - Duty-cycle illumination channel
//! - [`gpio::DigitalOutput`] - On/off light channel
//! - [`power::WakeSource`], [`power::PowerManager`] - Idle sleep and wake-up
//! - [`DelayNs`] - Delay primitive (re-exported from `embedded-hal-async`)

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod power;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use clock::{Clock, TickControl};
pub use embedded_hal_async::delay::DelayNs;
pub use gpio::DigitalOutput;
pub use power::{PowerManager, WakeSource};
pub use pwm::PwmOutput;
