//! Solenoid output implementations

pub mod gpio;

pub use gpio::GpioSolenoid;
