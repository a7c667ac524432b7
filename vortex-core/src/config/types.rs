//! Gimbal configuration
//!
//! All tuning is fixed at build time: the firmware build script parses
//! `gimbal.toml` into [`GimbalConfig`], validates it and embeds it as
//! postcard binary data.

use heapless::Vec;

use super::hardware::{PinConfig, ServoConfig, StartupConfig};
use crate::solenoid::FireCommand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum solenoids in the bank
pub const MAX_SOLENOIDS: usize = 8;

/// Maximum GPIOs claimed by a configuration (4 encoder lines, trigger, bank)
pub const MAX_PINS: usize = MAX_SOLENOIDS + 5;

/// Degrees added or removed per encoder detent
pub const DEFAULT_STEP: u8 = 3;

/// Upper angle limit, kept short of the servo's 180° travel
pub const DEFAULT_UPPER_BOUND: u8 = 170;

/// Configuration version understood by this firmware
pub const CONFIG_VERSION: u8 = 1;

/// Errors found while validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown configuration version
    UnsupportedVersion(u8),
    /// An axis has a step of zero
    ZeroStep,
    /// An axis has lower bound above upper bound
    InvertedBounds,
    /// An axis upper bound exceeds the servo travel
    BoundOutOfRange,
    /// No solenoids configured
    EmptyBank,
    /// The same GPIO is used twice
    DuplicatePin(u8),
    /// Servo pulse range is empty or longer than the frame
    InvalidPulseRange,
    /// Configuration blob could not be encoded or decoded
    Encoding,
}

/// Configuration for one encoder-driven axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Encoder signal A (the line whose edges are counted)
    pub pin_a: PinConfig,
    /// Encoder signal B (direction reference)
    pub pin_b: PinConfig,
    /// Degrees per detected transition
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step: u8,
    /// Lowest commanded angle
    #[cfg_attr(feature = "serde", serde(default))]
    pub lower_bound: u8,
    /// Highest commanded angle
    #[cfg_attr(feature = "serde", serde(default = "default_upper_bound"))]
    pub upper_bound: u8,
}

#[cfg(feature = "serde")]
fn default_step() -> u8 {
    DEFAULT_STEP
}

#[cfg(feature = "serde")]
fn default_upper_bound() -> u8 {
    DEFAULT_UPPER_BOUND
}

impl AxisConfig {
    /// Axis on the given encoder pins with the reference step and bounds
    pub const fn new(pin_a: u8, pin_b: u8) -> Self {
        Self {
            pin_a: PinConfig::with_pullup(pin_a),
            pin_b: PinConfig::with_pullup(pin_b),
            step: DEFAULT_STEP,
            lower_bound: 0,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }

    /// Check if an angle is within this axis' bounds
    pub fn is_in_bounds(&self, angle: i16) -> bool {
        angle >= self.lower_bound as i16 && angle <= self.upper_bound as i16
    }

    fn validate(&self, travel_deg: u8) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.lower_bound > self.upper_bound {
            return Err(ConfigError::InvertedBounds);
        }
        if self.upper_bound > travel_deg {
            return Err(ConfigError::BoundOutOfRange);
        }
        Ok(())
    }
}

/// Complete gimbal configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GimbalConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// Pan (x) axis
    pub pan: AxisConfig,
    /// Tilt (y) axis
    pub tilt: AxisConfig,
    /// Momentary fire button
    pub trigger: PinConfig,
    /// Solenoid outputs, always driven together
    pub solenoids: Vec<PinConfig, MAX_SOLENOIDS>,
    /// Pulse pattern used for every shot
    pub fire: FireCommand,
    /// Power-on settle times
    pub startup: StartupConfig,
    /// Servo pulse timing
    pub servo: ServoConfig,
}

impl Default for GimbalConfig {
    fn default() -> Self {
        let mut solenoids = Vec::new();
        for pin in [13, 12, 11, 10] {
            let _ = solenoids.push(PinConfig::new(pin));
        }

        Self {
            version: CONFIG_VERSION,
            pan: AxisConfig::new(3, 4),
            tilt: AxisConfig::new(5, 6),
            trigger: PinConfig::active_low_pullup(7),
            solenoids,
            fire: FireCommand::default(),
            startup: StartupConfig::default(),
            servo: ServoConfig::default(),
        }
    }
}

impl GimbalConfig {
    /// Create the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Every GPIO the configuration claims, in wiring order
    pub fn pins(&self) -> Vec<u8, MAX_PINS> {
        let mut pins = Vec::new();
        for pin in [
            self.pan.pin_a,
            self.pan.pin_b,
            self.tilt.pin_a,
            self.tilt.pin_b,
            self.trigger,
        ]
        .iter()
        .chain(self.solenoids.iter())
        {
            let _ = pins.push(pin.pin);
        }
        pins
    }

    /// Check the configuration for values the gimbal cannot run with
    ///
    /// Pin numbers are not range-checked here; that is board specific.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        self.pan.validate(self.servo.travel_deg)?;
        self.tilt.validate(self.servo.travel_deg)?;

        if self.solenoids.is_empty() {
            return Err(ConfigError::EmptyBank);
        }

        if self.servo.min_pulse_us >= self.servo.max_pulse_us
            || self.servo.max_pulse_us > self.servo.period_us
        {
            return Err(ConfigError::InvalidPulseRange);
        }

        let pins = self.pins();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }

        Ok(())
    }
}
