//! RP2040-specific HAL for the gimbal firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `vortex-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO allocation and management
//! - Dynamic pin allocation for config-driven setup
//! - Servo PWM slice setup

#![no_std]

pub mod gpio;
pub mod pins;
pub mod pwm;

pub use gpio::{GpioAllocator, RpInput, RpOutput};
pub use pins::{PinBank, PinError, ServoPeripherals};
