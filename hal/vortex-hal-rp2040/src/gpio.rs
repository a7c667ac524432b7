//! GPIO wrappers and allocation
//!
//! Wraps `embassy-rp` pins in types implementing the `vortex-hal` traits,
//! and tracks which GPIOs a configuration claims so conflicts are caught
//! before any pin is driven.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use heapless::FnvIndexSet;
use vortex_core::config::PinConfig;

use crate::pins::{check_pin, PinError};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Digital input on an RP2040 GPIO
pub struct RpInput(Input<'static>);

impl RpInput {
    /// Configure a pin as input with the pull from its config
    pub fn new(pin: Peri<'static, AnyPin>, config: &PinConfig) -> Self {
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        Self(Input::new(pin, pull))
    }
}

impl vortex_hal::InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Digital output on an RP2040 GPIO
pub struct RpOutput(Output<'static>);

impl RpOutput {
    /// Configure a pin as output, starting at its inactive level
    pub fn new(pin: Peri<'static, AnyPin>, config: &PinConfig) -> Self {
        // Inactive is LOW for active-high pins, HIGH for active-low
        let idle = if config.inverted { Level::High } else { Level::Low };
        Self(Output::new(pin, idle))
    }
}

impl vortex_hal::OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        check_pin(pin)?;
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken(pin));
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::AlreadyTaken(pin))?;
        Ok(())
    }

    /// Allocate every pin in `pins`, stopping at the first conflict
    pub fn allocate_all(&mut self, pins: &[u8]) -> Result<(), PinError> {
        pins.iter().try_for_each(|&pin| self.allocate(pin))
    }

    /// Check if a pin is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}
