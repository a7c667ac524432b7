//! Hobby servo on a PWM channel
//!
//! The servo reads the width of a pulse repeated every frame (20 ms for
//! 50 Hz). Angles map linearly onto the configured pulse range:
//!
//! ```text
//! pulse_us = min_pulse_us + angle * (max_pulse_us - min_pulse_us) / travel_deg
//! duty     = pulse_us / period_us
//! ```
//!
//! The PWM channel must already be running at the frame rate given by
//! `period_us`.

use embedded_hal::pwm::SetDutyCycle;
use vortex_core::config::ServoConfig;
use vortex_core::traits::AngularActuator;

/// Servo driven by one PWM channel
pub struct PwmServo<P> {
    pwm: P,
    config: ServoConfig,
    /// Last commanded angle, after clamping
    angle: u8,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Attach a servo to a PWM channel
    ///
    /// The channel output is left untouched until the first command.
    pub fn new(pwm: P, config: ServoConfig) -> Self {
        Self {
            pwm,
            config,
            angle: 0,
        }
    }

    /// Pulse width the servo is currently being sent
    pub fn pulse_width_us(&self) -> u16 {
        self.config.pulse_width_us(self.angle)
    }
}

impl<P: SetDutyCycle> AngularActuator for PwmServo<P> {
    fn command(&mut self, angle: u8) {
        self.angle = angle.min(self.config.travel_deg);
        let pulse_us = self.config.pulse_width_us(self.angle);

        // Pulse is never longer than the frame, so the duty is always valid
        let _ = self
            .pwm
            .set_duty_cycle_fraction(pulse_us, self.config.period_us);
    }

    fn commanded(&self) -> u8 {
        self.angle
    }
}
