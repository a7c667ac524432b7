//! Solenoid bank control

pub mod sequencer;

pub use sequencer::{FireCommand, SolenoidBank};
