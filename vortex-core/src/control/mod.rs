//! Control loop

pub mod gimbal;

pub use gimbal::{GimbalController, GimbalHardware, Iteration};
