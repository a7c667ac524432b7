//! Gimbal control loop
//!
//! One iteration, in order:
//!
//! 1. poll the pan encoder and command the pan servo
//! 2. poll the tilt encoder and command the tilt servo
//! 3. if the trigger is held, fire the solenoid bank (blocking)
//!
//! The controller owns every piece of hardware, so nothing else can touch
//! the pins while a shot is in progress. Encoder edges and trigger presses
//! during a shot are not seen.

use embedded_hal::delay::DelayNs;
use vortex_hal::InputPin;

use crate::config::{GimbalConfig, StartupConfig};
use crate::encoder::QuadratureAxis;
use crate::solenoid::{FireCommand, SolenoidBank};
use crate::traits::{AngularActuator, SolenoidOutput, TriggerInput};

/// Outcome of one control loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    /// Angle commanded to the pan servo
    pub pan: u8,
    /// Angle commanded to the tilt servo
    pub tilt: u8,
    /// Whether a shot was fired
    pub fired: bool,
}

impl Iteration {
    /// Check if the commanded angles differ from `other`
    pub fn moved_from(&self, other: &Iteration) -> bool {
        self.pan != other.pan || self.tilt != other.tilt
    }
}

/// Everything the controller drives, already wired up
pub struct GimbalHardware<I, S, T, A, D> {
    /// Pan (x) encoder
    pub pan: QuadratureAxis<I>,
    /// Tilt (y) encoder
    pub tilt: QuadratureAxis<I>,
    /// Pan servo
    pub pan_servo: A,
    /// Tilt servo
    pub tilt_servo: A,
    /// Fire button
    pub trigger: T,
    /// Vortex solenoids
    pub bank: SolenoidBank<S>,
    /// Blocking delay used for the firing sequence and startup settles
    pub delay: D,
}

/// The gimbal controller
pub struct GimbalController<I, S, T, A, D> {
    hw: GimbalHardware<I, S, T, A, D>,
    fire: FireCommand,
    startup: StartupConfig,
    shots: u32,
}

impl<I, S, T, A, D> GimbalController<I, S, T, A, D>
where
    I: InputPin,
    S: SolenoidOutput,
    T: TriggerInput,
    A: AngularActuator,
    D: DelayNs,
{
    /// Create a controller using the timing from `config`
    pub fn new(hw: GimbalHardware<I, S, T, A, D>, config: &GimbalConfig) -> Self {
        Self {
            hw,
            fire: config.fire,
            startup: config.startup,
            shots: 0,
        }
    }

    /// Bring the hardware to a known state
    ///
    /// Waits for the servos to attach, releases every solenoid, parks both
    /// servos at their axis' starting angle, then re-reads the encoder A
    /// lines so the first iteration starts without a phantom edge.
    pub fn startup(&mut self) {
        let hw = &mut self.hw;

        hw.delay.delay_ms(self.startup.attach_settle_ms);

        hw.bank.all_off(&mut hw.delay, self.startup.solenoid_settle_ms);

        hw.pan_servo.command(hw.pan.angle());
        hw.tilt_servo.command(hw.tilt.angle());
        hw.delay.delay_ms(self.startup.servo_settle_ms);

        hw.pan.resync();
        hw.tilt.resync();
    }

    /// Run one control loop iteration
    pub fn step(&mut self) -> Iteration {
        let hw = &mut self.hw;

        let pan = hw.pan.poll();
        hw.pan_servo.command(pan);

        let tilt = hw.tilt.poll();
        hw.tilt_servo.command(tilt);

        let fired = hw.trigger.is_asserted();
        if fired {
            hw.bank.fire(&mut hw.delay, self.fire);
            self.shots = self.shots.wrapping_add(1);
        }

        Iteration { pan, tilt, fired }
    }

    /// Run the control loop forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Shots fired since power-on
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Fire command used for every shot
    pub fn fire_command(&self) -> FireCommand {
        self.fire
    }

    /// The wired hardware
    pub fn hardware(&self) -> &GimbalHardware<I, S, T, A, D> {
        &self.hw
    }
}
