//! Gimbal control task
//!
//! Runs the control loop forever. Firing blocks the whole executor for the
//! length of the shot, which is fine since this is the only task.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::pwm::PwmOutput;
use embassy_time::Delay;

use vortex_core::control::{GimbalController, Iteration};
use vortex_drivers::{ButtonTrigger, GpioSolenoid, PwmServo};
use vortex_hal_rp2040::{RpInput, RpOutput};

/// The controller as wired on the RP2040 board
pub type Gimbal = GimbalController<
    RpInput,
    GpioSolenoid<RpOutput>,
    ButtonTrigger<RpInput>,
    PwmServo<PwmOutput<'static>>,
    Delay,
>;

/// Bring the gimbal up and run the control loop
pub async fn gimbal_loop(mut gimbal: Gimbal) -> ! {
    info!("Gimbal task started");

    gimbal.startup();
    info!("ready");

    let mut last = Iteration::default();

    loop {
        let iteration = gimbal.step();

        if iteration.moved_from(&last) {
            debug!("pan={} tilt={}", iteration.pan, iteration.tilt);
        }
        if iteration.fired {
            info!("Fired (shot {})", gimbal.shots());
        }
        last = iteration;

        yield_now().await;
    }
}
