//! GPIO solenoid output
//!
//! One solenoid switched through a MOSFET or driver board on a GPIO pin.

use vortex_core::config::PinConfig;
use vortex_core::traits::SolenoidOutput;
use vortex_hal::OutputPin;

/// Solenoid on a GPIO pin
///
/// The pin can be active-high (default) or active-low.
pub struct GpioSolenoid<P> {
    pin: P,
    /// If true, energized = pin LOW
    inverted: bool,
}

impl<P: OutputPin> GpioSolenoid<P> {
    /// Create a solenoid output, released
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the solenoid is energized when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut solenoid = Self { pin, inverted };
        solenoid.set_energized(false);
        solenoid
    }

    /// Create a solenoid output with the polarity from its pin config
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }
}

impl<P: OutputPin> SolenoidOutput for GpioSolenoid<P> {
    fn set_energized(&mut self, on: bool) {
        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_energized(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_solenoid() {
        // Pin comes up high; creating the output must release it
        let mut solenoid = GpioSolenoid::new(MockPin { high: true }, false);
        assert!(!solenoid.is_energized());
        assert!(!solenoid.pin.is_set_high());

        solenoid.set_energized(true);
        assert!(solenoid.is_energized());
        assert!(solenoid.pin.is_set_high());

        solenoid.set_energized(false);
        assert!(!solenoid.is_energized());
    }

    #[test]
    fn test_active_low_solenoid() {
        let mut solenoid = GpioSolenoid::new(MockPin { high: false }, true);
        assert!(!solenoid.is_energized());
        assert!(solenoid.pin.is_set_high());

        solenoid.set_energized(true);
        assert!(solenoid.is_energized());
        assert!(!solenoid.pin.is_set_high());
    }

    #[test]
    fn test_from_config() {
        let solenoid = GpioSolenoid::from_config(MockPin { high: false }, &PinConfig::new(13));
        assert!(!solenoid.inverted);

        let config = PinConfig {
            inverted: true,
            ..PinConfig::new(12)
        };
        let solenoid = GpioSolenoid::from_config(MockPin { high: false }, &config);
        assert!(solenoid.inverted);
        assert!(!solenoid.is_energized());
    }
}
