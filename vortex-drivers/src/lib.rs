//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vortex-core for the gimbal's peripherals:
//!
//! - Hobby servos on PWM channels
//! - Solenoids switched from GPIO pins
//! - The fire push button

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod input;
pub mod solenoid;

pub use actuator::PwmServo;
pub use input::ButtonTrigger;
pub use solenoid::GpioSolenoid;
