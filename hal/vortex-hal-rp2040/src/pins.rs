//! Pin allocation by number
//!
//! The gimbal's GPIO assignment comes from `gimbal.toml`, so pins are taken
//! by number at boot instead of by peripheral name. The servo pins are the
//! exception: PWM needs the typed pins and slice, so they are split off up
//! front and reported as reserved.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_8, PIN_9, PWM_SLICE4};
use embassy_rp::{Peri, Peripherals};

use crate::gpio::GPIO_COUNT;

/// GPIO driving the pan servo (PWM slice 4, channel A)
pub const PAN_SERVO_PIN: u8 = 8;

/// GPIO driving the tilt servo (PWM slice 4, channel B)
pub const TILT_SERVO_PIN: u8 = 9;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
    /// Pin reserved for the servo PWM outputs
    Reserved(u8),
}

/// Peripherals used for the servo outputs
pub struct ServoPeripherals {
    /// PWM slice shared by both servos
    pub slice: Peri<'static, PWM_SLICE4>,
    /// Pan servo signal
    pub pan: Peri<'static, PIN_8>,
    /// Tilt servo signal
    pub tilt: Peri<'static, PIN_9>,
}

/// Pin bank holding the general purpose GPIOs
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Split the chip peripherals into a pin bank and the servo peripherals
    pub fn new(p: Peripherals) -> (Self, ServoPeripherals) {
        let servo = ServoPeripherals {
            slice: p.PWM_SLICE4,
            pan: p.PIN_8,
            tilt: p.PIN_9,
        };

        let bank = Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                None,
                None,
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };

        (bank, servo)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        check_pin(pin_num)?;
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }
}

/// Check that a pin exists and is free for general use
pub fn check_pin(pin_num: u8) -> Result<(), PinError> {
    if pin_num as usize >= GPIO_COUNT {
        return Err(PinError::InvalidPin(pin_num));
    }
    if pin_num == PAN_SERVO_PIN || pin_num == TILT_SERVO_PIN {
        return Err(PinError::Reserved(pin_num));
    }
    Ok(())
}
