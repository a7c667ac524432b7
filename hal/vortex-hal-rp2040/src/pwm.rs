//! Servo PWM setup
//!
//! Both servos share PWM slice 4 (GPIO8 = A, GPIO9 = B). The slice counter
//! is clocked from the system clock through an integer divider, and wraps
//! at `top` once per servo frame. The divider is the smallest one that lets
//! a 16-bit counter span the whole frame, so every `period_us` a config can
//! hold is timed exactly and keeps the finest duty resolution.

use embassy_rp::pwm::{Config, Pwm, PwmOutput};
use fixed::types::extra::U4;
use fixed::FixedU16;

use crate::pins::ServoPeripherals;

/// System clock frequency (125 MHz default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// System clock ticks per microsecond
const TICKS_PER_US: u64 = (SYS_CLK_HZ / 1_000_000) as u64;

/// Counter states available in one frame
const COUNTER_RANGE: u64 = 1 << 16;

/// Integer clock divider for a frame of `period_us`
///
/// divider = ceil(period_us * SYS_CLK / 1_000_000 / 65536), at least 1.
/// A u16 period needs at most 125, well inside the 8-bit divider.
pub fn calc_clock_divider(period_us: u16) -> u8 {
    let ticks = period_us as u64 * TICKS_PER_US;
    ticks.div_ceil(COUNTER_RANGE).clamp(1, u8::MAX as u64) as u8
}

/// Counter wrap value for a frame of `period_us`
///
/// top = period_us * (SYS_CLK / divider) / 1_000_000 - 1
pub fn calc_top(period_us: u16) -> u16 {
    let divider = calc_clock_divider(period_us) as u64;
    let counts = period_us as u64 * TICKS_PER_US / divider;
    counts.saturating_sub(1).min(u16::MAX as u64) as u16
}

/// Frame length the slice actually produces for `period_us`, in µs
pub fn frame_us(period_us: u16) -> u32 {
    let counts = calc_top(period_us) as u64 + 1;
    (counts * calc_clock_divider(period_us) as u64 / TICKS_PER_US) as u32
}

/// PWM slice configuration for a servo frame of `period_us`
///
/// Outputs start at 0% duty so the servos stay limp until commanded.
pub fn servo_config(period_us: u16) -> Config {
    let mut config = Config::default();
    config.divider = FixedU16::<U4>::from_num(calc_clock_divider(period_us));
    config.top = calc_top(period_us);
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Start the servo slice and return the (pan, tilt) channels
pub fn servo_outputs(
    servo: ServoPeripherals,
    period_us: u16,
) -> (Option<PwmOutput<'static>>, Option<PwmOutput<'static>>) {
    let pwm = Pwm::new_output_ab(servo.slice, servo.pan, servo.tilt, servo_config(period_us));
    pwm.split()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_50hz_frame() {
        // 2_500_000 ticks / 65536 -> divider 39, 64102 counts per frame
        assert_eq!(calc_clock_divider(20_000), 39);
        assert_eq!(calc_top(20_000), 64_101);
        assert!(frame_us(20_000).abs_diff(20_000) <= 1);
    }

    #[test]
    fn test_long_frame_is_not_truncated() {
        // 5_000_000 ticks needs a divider of 77 to fit 16 bits
        assert_eq!(calc_clock_divider(40_000), 77);
        assert_eq!(calc_top(40_000), 64_934);
        assert!(frame_us(40_000).abs_diff(40_000) <= 1);
    }

    #[test]
    fn test_every_period_fits_counter() {
        for period_us in (1..=u16::MAX).step_by(7).chain([u16::MAX]) {
            let divider = calc_clock_divider(period_us);
            let counts = period_us as u64 * TICKS_PER_US / divider as u64;
            assert!(counts <= COUNTER_RANGE, "period {}", period_us);
            assert!(frame_us(period_us).abs_diff(period_us as u32) <= 1);
        }
    }

    #[test]
    fn test_zero_period() {
        assert_eq!(calc_clock_divider(0), 1);
        assert_eq!(calc_top(0), 0);
    }
}
