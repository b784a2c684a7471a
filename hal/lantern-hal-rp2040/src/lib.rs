//! RP2040-specific HAL for the breathing-light firmware
//!
//! This crate provides RP2040 implementations of the `lantern-hal`
//! capability traits:
//!
//! - [`pwm::RoofPwm`] - 8-bit duty PWM on one slice channel
//! - [`gpio::InteriorLight`] - Polarity-aware on/off light
//! - [`wake::TouchWake`] - Touch sensor input as the wake source
//! - [`systick::SysTickMillis`] - 1 ms SysTick for the millisecond clock,
//!   paused during idle sleep

#![no_std]

pub mod gpio;
pub mod pwm;
pub mod systick;
pub mod wake;

pub use gpio::InteriorLight;
pub use pwm::RoofPwm;
pub use systick::SysTickMillis;
pub use wake::TouchWake;
