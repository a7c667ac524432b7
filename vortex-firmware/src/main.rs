//! Vortex - Air Vortex Ring Gimbal Firmware
//!
//! Main firmware binary for the RP2040-based gimbal. Two rotary encoders
//! steer a pan/tilt pair of servos, and a push button fires the vortex
//! solenoids.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::Peripherals;
use embassy_time::Delay;
use heapless::Vec;
use {defmt_rtt as _, panic_probe as _};

use vortex_core::config::{GimbalConfig, PinConfig, MAX_SOLENOIDS};
use vortex_core::control::{GimbalController, GimbalHardware};
use vortex_core::encoder::QuadratureAxis;
use vortex_core::solenoid::SolenoidBank;
use vortex_drivers::{ButtonTrigger, GpioSolenoid, PwmServo};
use vortex_hal_rp2040::{pwm, GpioAllocator, PinBank, PinError, RpInput, RpOutput};

use crate::tasks::Gimbal;

mod config;
mod tasks;

/// Reasons the board cannot be brought up
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum BootError {
    /// A configured pin is invalid, reserved or taken twice
    Pin(PinError),
    /// The servo PWM slice did not hand out both channels
    ServoPwm,
}

impl From<PinError> for BootError {
    fn from(e: PinError) -> Self {
        BootError::Pin(e)
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Vortex firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Check the whole pin map before driving anything
    let mut allocator = GpioAllocator::new();
    if let Err(e) = allocator.allocate_all(&config.pins()) {
        error!("Pin allocation failed: {:?}", e);
        halt();
    }
    debug!("{} GPIOs allocated", allocator.allocated_count());

    let gimbal = match build_gimbal(p, &config) {
        Ok(gimbal) => gimbal,
        Err(e) => {
            error!("Hardware setup failed: {:?}", e);
            halt();
        }
    };

    tasks::gimbal_loop(gimbal).await
}

/// Wire the configured pins into a gimbal controller
fn build_gimbal(p: Peripherals, config: &GimbalConfig) -> Result<Gimbal, BootError> {
    let (mut bank, servo) = PinBank::new(p);

    let pan = QuadratureAxis::new(
        input(&mut bank, &config.pan.pin_a)?,
        input(&mut bank, &config.pan.pin_b)?,
        config.pan,
    );
    let tilt = QuadratureAxis::new(
        input(&mut bank, &config.tilt.pin_a)?,
        input(&mut bank, &config.tilt.pin_b)?,
        config.tilt,
    );

    let trigger = ButtonTrigger::from_config(input(&mut bank, &config.trigger)?, &config.trigger);

    let mut solenoids: Vec<GpioSolenoid<RpOutput>, MAX_SOLENOIDS> = Vec::new();
    for solenoid in &config.solenoids {
        let pin = RpOutput::new(bank.take(solenoid.pin)?, solenoid);
        // Same capacity as the config list
        let _ = solenoids.push(GpioSolenoid::from_config(pin, solenoid));
    }
    info!("{} solenoids released", solenoids.len());

    let (pan_pwm, tilt_pwm) = pwm::servo_outputs(servo, config.servo.period_us);
    let (Some(pan_pwm), Some(tilt_pwm)) = (pan_pwm, tilt_pwm) else {
        return Err(BootError::ServoPwm);
    };
    info!("Servo PWM running, period {}us", config.servo.period_us);

    let hw = GimbalHardware {
        pan,
        tilt,
        pan_servo: PwmServo::new(pan_pwm, config.servo),
        tilt_servo: PwmServo::new(tilt_pwm, config.servo),
        trigger,
        bank: SolenoidBank::new(solenoids),
        delay: Delay,
    };

    Ok(GimbalController::new(hw, config))
}

/// Take a configured pin as an input
fn input(bank: &mut PinBank, pin: &PinConfig) -> Result<RpInput, PinError> {
    Ok(RpInput::new(bank.take(pin.pin)?, pin))
}

/// Park the core; the wiring does not match the config
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
