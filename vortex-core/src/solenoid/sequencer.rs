//! Solenoid firing sequence
//!
//! All solenoids in the bank are switched together: energize every output,
//! hold for `high_ms`, release every output, then hold for `low_ms` so the
//! plungers return before anything else happens. The whole sequence blocks
//! the caller; there is no abort path.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::config::MAX_SOLENOIDS;
use crate::traits::SolenoidOutput;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing of one vortex shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FireCommand {
    /// Time the solenoids are held energized
    pub high_ms: u32,
    /// Recovery time after release
    pub low_ms: u32,
}

impl Default for FireCommand {
    fn default() -> Self {
        Self {
            high_ms: 300,
            low_ms: 100,
        }
    }
}

impl FireCommand {
    /// Create a fire command
    pub const fn new(high_ms: u32, low_ms: u32) -> Self {
        Self { high_ms, low_ms }
    }
}

/// A group of solenoids that are always driven as one
pub struct SolenoidBank<S> {
    outputs: Vec<S, MAX_SOLENOIDS>,
}

impl<S: SolenoidOutput> SolenoidBank<S> {
    /// Create a bank from its outputs
    pub fn new(outputs: Vec<S, MAX_SOLENOIDS>) -> Self {
        Self { outputs }
    }

    /// Add an output to the bank
    ///
    /// Returns the output back if the bank is full.
    pub fn push(&mut self, output: S) -> Result<(), S> {
        self.outputs.push(output)
    }

    /// Number of solenoids in the bank
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Check if the bank has no solenoids
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Fire one shot, blocking for `high_ms + low_ms`
    pub fn fire<D: DelayNs>(&mut self, delay: &mut D, command: FireCommand) {
        self.set_all(true);
        delay.delay_ms(command.high_ms);
        self.set_all(false);
        delay.delay_ms(command.low_ms);
    }

    /// Release every solenoid and wait `settle_ms`
    pub fn all_off<D: DelayNs>(&mut self, delay: &mut D, settle_ms: u32) {
        self.set_all(false);
        delay.delay_ms(settle_ms);
    }

    /// Check if every solenoid is energized
    pub fn is_energized(&self) -> bool {
        !self.outputs.is_empty() && self.outputs.iter().all(|s| s.is_energized())
    }

    /// Check if every solenoid is released
    pub fn is_idle(&self) -> bool {
        self.outputs.iter().all(|s| !s.is_energized())
    }

    fn set_all(&mut self, on: bool) {
        for output in self.outputs.iter_mut() {
            output.set_energized(on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockSolenoid<'a>(&'a Cell<bool>);

    impl SolenoidOutput for MockSolenoid<'_> {
        fn set_energized(&mut self, on: bool) {
            self.0.set(on);
        }

        fn is_energized(&self) -> bool {
            self.0.get()
        }
    }

    /// Delay that snapshots the bank each time it is asked to wait
    struct MockDelay<'a> {
        lines: &'a [Cell<bool>],
        waits: Vec<(u32, bool), 8>,
    }

    impl<'a> MockDelay<'a> {
        fn new(lines: &'a [Cell<bool>]) -> Self {
            Self {
                lines,
                waits: Vec::new(),
            }
        }
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            let all_on = self.lines.iter().all(|l| l.get());
            let _ = self.waits.push((ns / 1_000_000, all_on));
        }
    }

    fn bank(lines: &[Cell<bool>]) -> SolenoidBank<MockSolenoid<'_>> {
        let mut bank = SolenoidBank::new(Vec::new());
        for line in lines {
            assert!(bank.push(MockSolenoid(line)).is_ok());
        }
        bank
    }

    #[test]
    fn test_fire_reference_timing() {
        let lines: [Cell<bool>; 4] = Default::default();
        let mut bank = bank(&lines);
        let mut delay = MockDelay::new(&lines);

        bank.fire(&mut delay, FireCommand::default());

        // All four were on together for the high phase, all off for the low phase
        assert_eq!(delay.waits.as_slice(), &[(300, true), (100, false)]);
        assert!(lines.iter().all(|l| !l.get()));
        assert!(bank.is_idle());
    }

    #[test]
    fn test_fire_custom_timing() {
        let lines: [Cell<bool>; 2] = Default::default();
        let mut bank = bank(&lines);
        let mut delay = MockDelay::new(&lines);

        bank.fire(&mut delay, FireCommand::new(50, 0));

        assert_eq!(delay.waits.as_slice(), &[(50, true), (0, false)]);
        assert!(bank.is_idle());
    }

    #[test]
    fn test_all_off_releases_everything() {
        let lines: [Cell<bool>; 4] = Default::default();
        lines[1].set(true);
        lines[3].set(true);
        let mut bank = bank(&lines);
        let mut delay = MockDelay::new(&lines);

        assert!(!bank.is_idle());
        bank.all_off(&mut delay, 100);

        assert!(bank.is_idle());
        assert!(!bank.is_energized());
        assert_eq!(delay.waits.as_slice(), &[(100, false)]);
    }

    #[test]
    fn test_bank_capacity() {
        let lines: [Cell<bool>; MAX_SOLENOIDS + 1] = Default::default();
        let mut bank = SolenoidBank::new(Vec::new());
        for line in &lines[..MAX_SOLENOIDS] {
            assert!(bank.push(MockSolenoid(line)).is_ok());
        }
        assert!(bank.push(MockSolenoid(&lines[MAX_SOLENOIDS])).is_err());
        assert_eq!(bank.len(), MAX_SOLENOIDS);
    }

    #[test]
    fn test_empty_bank_is_never_energized() {
        let bank: SolenoidBank<MockSolenoid<'_>> = SolenoidBank::new(Vec::new());
        assert!(bank.is_empty());
        assert!(bank.is_idle());
        assert!(!bank.is_energized());
    }
}
