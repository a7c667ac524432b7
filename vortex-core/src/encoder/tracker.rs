//! Quadrature encoder tracking
//!
//! Turns edges on an encoder's A line into a bounded angle. Each edge on A
//! moves the angle by one `step`; the level of B relative to the new level
//! of A gives the direction:
//!
//! ```text
//! A edge, B != A  -> +step (clockwise)
//! A edge, B == A  -> -step (counter-clockwise)
//! no A edge       -> unchanged
//! ```
//!
//! There is no debouncing; the polling rate is the only filter.

use vortex_hal::InputPin;

use crate::config::AxisConfig;

/// Direction of a single decoded encoder step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No edge on A since the last sample
    None,
    /// B differed from the new A level
    Increment,
    /// B matched the new A level
    Decrement,
}

/// Persistent decoder state for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisState {
    /// Commanded angle, within the axis bounds after every update
    position: i16,
    /// Level of A at the previous sample (true = high)
    last_a: bool,
}

impl AxisState {
    /// Zero position with the given previous A level
    pub const fn new(last_a: bool) -> Self {
        Self {
            position: 0,
            last_a,
        }
    }

    /// State parked at `position` (must already be in bounds)
    pub const fn at(position: u8, last_a: bool) -> Self {
        Self {
            position: position as i16,
            last_a,
        }
    }

    /// Current position in degrees
    pub fn position(&self) -> i16 {
        self.position
    }

    /// Current position as an actuator angle
    pub fn angle(&self) -> u8 {
        // Bounds are u8, so a clamped position always fits
        self.position as u8
    }

    /// Level of A recorded at the last sample
    pub fn last_a(&self) -> bool {
        self.last_a
    }

    /// Classify a sample without changing state
    pub fn classify(&self, a: bool, b: bool) -> Rotation {
        if a == self.last_a {
            Rotation::None
        } else if b != a {
            Rotation::Increment
        } else {
            Rotation::Decrement
        }
    }

    /// Feed one sample of both lines and return the new angle
    pub fn advance(&mut self, config: &AxisConfig, a: bool, b: bool) -> u8 {
        let rotation = self.classify(a, b);
        self.apply(config, rotation);
        self.last_a = a;
        self.angle()
    }

    /// Overwrite the stored A level without moving
    pub fn set_last_a(&mut self, a: bool) {
        self.last_a = a;
    }

    fn apply(&mut self, config: &AxisConfig, rotation: Rotation) {
        let step = config.step as i16;
        let mut next = match rotation {
            Rotation::None => return,
            Rotation::Increment => self.position + step,
            Rotation::Decrement => self.position - step,
        };

        // Upper then lower, independently: a value past both ends settles low
        let upper = config.upper_bound as i16;
        let lower = config.lower_bound as i16;
        if next >= upper {
            next = upper;
        }
        if next <= lower {
            next = lower;
        }

        self.position = next;
    }
}

/// An encoder wired to one gimbal axis
///
/// Owns both signal pins, the axis configuration and the decoder state.
pub struct QuadratureAxis<I> {
    pin_a: I,
    pin_b: I,
    config: AxisConfig,
    state: AxisState,
}

impl<I: InputPin> QuadratureAxis<I> {
    /// Create an axis at its lower bound, seeded with the live A level
    pub fn new(pin_a: I, pin_b: I, config: AxisConfig) -> Self {
        let state = AxisState::at(config.lower_bound, pin_a.is_high());
        Self {
            pin_a,
            pin_b,
            config,
            state,
        }
    }

    /// Sample the encoder once and return the angle to command
    ///
    /// B is only read when A has moved.
    pub fn poll(&mut self) -> u8 {
        let a = self.pin_a.is_high();
        if a == self.state.last_a() {
            return self.state.angle();
        }

        let b = self.pin_b.is_high();
        self.state.advance(&self.config, a, b)
    }

    /// Re-seed the stored A level from the pin without moving
    ///
    /// Called once the inputs have settled after power-on so that the
    /// first poll does not count a spurious edge.
    pub fn resync(&mut self) {
        self.state.set_last_a(self.pin_a.is_high());
    }

    /// Current angle
    pub fn angle(&self) -> u8 {
        self.state.angle()
    }

    /// Decoder state
    pub fn state(&self) -> &AxisState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    struct MockInput<'a>(&'a Cell<bool>);

    impl InputPin for MockInput<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    fn config(step: u8) -> AxisConfig {
        AxisConfig {
            step,
            ..AxisConfig::new(3, 4)
        }
    }

    /// Toggle A and set B so the edge decodes as `rotation`
    fn edge(state: &mut AxisState, config: &AxisConfig, rotation: Rotation) -> u8 {
        let a = !state.last_a();
        let b = match rotation {
            Rotation::Increment => !a,
            Rotation::Decrement => a,
            Rotation::None => unreachable!(),
        };
        state.advance(config, a, b)
    }

    #[test]
    fn test_classify() {
        let state = AxisState::new(false);
        assert_eq!(state.classify(false, true), Rotation::None);
        assert_eq!(state.classify(false, false), Rotation::None);
        assert_eq!(state.classify(true, false), Rotation::Increment);
        assert_eq!(state.classify(true, true), Rotation::Decrement);

        let state = AxisState::new(true);
        assert_eq!(state.classify(false, true), Rotation::Increment);
        assert_eq!(state.classify(false, false), Rotation::Decrement);
    }

    #[test]
    fn test_three_increments_then_fourth() {
        let config = config(3);
        let mut state = AxisState::new(false);

        for _ in 0..3 {
            edge(&mut state, &config, Rotation::Increment);
        }
        assert_eq!(state.angle(), 9);

        // No premature clamp on the way up
        assert_eq!(edge(&mut state, &config, Rotation::Increment), 12);
    }

    #[test]
    fn test_saturates_at_upper_bound() {
        let config = config(3);
        let mut state = AxisState::at(170, false);

        assert_eq!(edge(&mut state, &config, Rotation::Increment), 170);
        assert_eq!(edge(&mut state, &config, Rotation::Increment), 170);

        // Comes straight back down from the clamp
        assert_eq!(edge(&mut state, &config, Rotation::Decrement), 167);
    }

    #[test]
    fn test_partial_step_clamps_to_upper() {
        let config = config(3);
        let mut state = AxisState::at(168, false);
        assert_eq!(edge(&mut state, &config, Rotation::Increment), 170);
    }

    #[test]
    fn test_saturates_at_zero() {
        let config = config(3);
        let mut state = AxisState::new(false);

        edge(&mut state, &config, Rotation::Increment);
        assert_eq!(edge(&mut state, &config, Rotation::Decrement), 0);
        assert_eq!(edge(&mut state, &config, Rotation::Decrement), 0);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_no_edge_keeps_position_but_tracks_a() {
        let config = config(3);
        let mut state = AxisState::at(30, true);

        // B toggling alone is ignored
        assert_eq!(state.advance(&config, true, false), 30);
        assert_eq!(state.advance(&config, true, true), 30);
        assert!(state.last_a());

        assert_eq!(state.advance(&config, false, true), 33);
        assert!(!state.last_a());
    }

    #[test]
    fn test_overshoot_past_both_bounds_settles_low() {
        // Only reachable with crossed bounds, which validate() rejects
        let config = AxisConfig {
            lower_bound: 100,
            upper_bound: 50,
            ..config(3)
        };
        let mut state = AxisState::at(60, false);
        assert_eq!(edge(&mut state, &config, Rotation::Increment), 100);
    }

    #[test]
    fn test_axis_reads_pins() {
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut axis = QuadratureAxis::new(MockInput(&a), MockInput(&b), config(3));

        assert_eq!(axis.angle(), 0);
        assert!(axis.state().last_a());
        assert_eq!(axis.poll(), 0);

        // A falls with B high: B differs from A -> increment
        a.set(false);
        assert_eq!(axis.poll(), 3);

        // Holding still does nothing
        assert_eq!(axis.poll(), 3);

        // A rises with B high: B matches A -> decrement
        a.set(true);
        assert_eq!(axis.poll(), 0);
    }

    #[test]
    fn test_axis_starts_at_lower_bound() {
        let a = Cell::new(false);
        let b = Cell::new(false);
        let config = AxisConfig {
            lower_bound: 20,
            ..config(3)
        };
        let axis = QuadratureAxis::new(MockInput(&a), MockInput(&b), config);
        assert_eq!(axis.angle(), 20);
    }

    #[test]
    fn test_resync_swallows_power_on_edge() {
        let a = Cell::new(false);
        let b = Cell::new(false);
        let mut axis = QuadratureAxis::new(MockInput(&a), MockInput(&b), config(3));

        // Pull-up brings A high after construction
        a.set(true);
        axis.resync();
        assert_eq!(axis.poll(), 0);
        assert!(axis.state().last_a());
    }

    proptest! {
        #[test]
        fn prop_position_always_in_bounds(
            step in 1u8..=60,
            lower in 0u8..=90,
            span in 0u8..=90,
            samples in prop::collection::vec((any::<bool>(), any::<bool>()), 0..500),
        ) {
            let config = AxisConfig {
                step,
                lower_bound: lower,
                upper_bound: lower + span,
                ..AxisConfig::new(3, 4)
            };
            let mut state = AxisState::at(lower, false);

            for (a, b) in samples {
                let angle = state.advance(&config, a, b);
                prop_assert!(config.is_in_bounds(angle as i16));
                prop_assert_eq!(state.last_a(), a);
            }
        }

        #[test]
        fn prop_matches_saturating_counter(
            step in 1u8..=20,
            upper in 0u8..=180,
            increments in prop::collection::vec(any::<bool>(), 0..300),
        ) {
            let config = AxisConfig {
                step,
                upper_bound: upper,
                ..AxisConfig::new(3, 4)
            };
            let mut state = AxisState::new(false);
            let mut expected: i16 = 0;

            for increment in increments {
                let rotation = if increment { Rotation::Increment } else { Rotation::Decrement };
                let delta = if increment { step as i16 } else { -(step as i16) };
                expected = (expected + delta).clamp(0, upper as i16);

                prop_assert_eq!(edge(&mut state, &config, rotation) as i16, expected);
            }
        }
    }
}
