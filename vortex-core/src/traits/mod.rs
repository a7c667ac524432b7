//! Hardware abstraction traits
//!
//! These traits define the interface between the gimbal logic and the
//! concrete drivers in `vortex-drivers`. All of them are infallible.

pub mod actuator;
pub mod solenoid;
pub mod trigger;

pub use actuator::AngularActuator;
pub use solenoid::SolenoidOutput;
pub use trigger::TriggerInput;
