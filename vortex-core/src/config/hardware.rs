//! Hardware configuration types
//!
//! Pin assignments, servo pulse timing and startup settle times.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
    /// Enable internal pull-up
    #[cfg_attr(feature = "serde", serde(default))]
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }

    /// Create an active-low input idling high on its pull-up
    ///
    /// This is how a momentary switch to ground is wired.
    pub const fn active_low_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }

    /// Electrical level (true = high) that means "active" for this pin
    pub const fn active_high(&self) -> bool {
        !self.inverted
    }
}

/// Hobby servo pulse timing
///
/// The defaults match the common Arduino servo convention (544-2400 µs
/// over 0-180°) at a 50 Hz frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServoConfig {
    /// Pulse width at 0°
    pub min_pulse_us: u16,
    /// Pulse width at full travel
    pub max_pulse_us: u16,
    /// PWM frame period
    pub period_us: u16,
    /// Mechanical travel in degrees
    pub travel_deg: u8,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 544,
            max_pulse_us: 2400,
            period_us: 20_000,
            travel_deg: 180,
        }
    }
}

impl ServoConfig {
    /// Pulse width for an angle, clamped to the servo's travel
    pub fn pulse_width_us(&self, angle: u8) -> u16 {
        let angle = angle.min(self.travel_deg) as u32;
        let travel = self.travel_deg.max(1) as u32;
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us) as u32;
        self.min_pulse_us + (angle * span / travel) as u16
    }
}

/// Settle pauses used during power-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartupConfig {
    /// Wait after attaching the servos before driving anything
    pub attach_settle_ms: u32,
    /// Wait after switching every solenoid off
    pub solenoid_settle_ms: u32,
    /// Wait after commanding both servos to 0°
    pub servo_settle_ms: u32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            attach_settle_ms: 200,
            solenoid_settle_ms: 100,
            servo_settle_ms: 100,
        }
    }
}
