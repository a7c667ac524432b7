//! Embassy async tasks
//!
//! The gimbal runs as a single task that owns all hardware.

pub mod gimbal;

pub use gimbal::{gimbal_loop, Gimbal};
