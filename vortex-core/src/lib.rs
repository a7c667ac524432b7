//! Board-agnostic core logic for the vortex gimbal firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (servo, solenoid, trigger)
//! - Quadrature encoder tracking with bounded angles
//! - Solenoid bank firing sequence
//! - The gimbal control loop
//! - Configuration type definitions and validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod encoder;
pub mod solenoid;
pub mod traits;
