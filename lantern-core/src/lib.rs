//! Board-agnostic core logic for the breathing-light firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration types and startup validation
//! - Interrupt-fed millisecond counter
//! - Breathing effects (time-interpolated and step-interpolated)
//! - Idle sleep with the millisecond tick paused
//! - Session state machine and the sleep/wake session loop

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod config;
pub mod effect;
pub mod power;
pub mod session;
