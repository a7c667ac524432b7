//! Angular actuator implementations

pub mod servo;

pub use servo::PwmServo;
