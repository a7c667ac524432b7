//! Encoder tracking
//!
//! Maps operator knob rotation to bounded axis angles.

pub mod tracker;

pub use tracker::{AxisState, QuadratureAxis, Rotation};
