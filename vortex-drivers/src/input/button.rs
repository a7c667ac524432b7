//! Push button trigger
//!
//! The reference wiring is a switch to ground with the pin pulled up, so a
//! press reads LOW.

use vortex_core::config::PinConfig;
use vortex_core::traits::TriggerInput;
use vortex_hal::InputPin;

/// Momentary push button on a GPIO
pub struct ButtonTrigger<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> ButtonTrigger<P> {
    /// Create a button trigger
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Create a button with the polarity from its pin config
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }
}

impl<P: InputPin> TriggerInput for ButtonTrigger<P> {
    fn is_asserted(&self) -> bool {
        self.pin.is_high() != self.active_low
    }
}
