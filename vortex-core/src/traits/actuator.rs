//! Angular actuator trait

/// An actuator that holds a commanded angle (hobby servo, etc.)
///
/// Commands are fire-and-forget: the actuator moves on its own and there
/// is no position feedback.
pub trait AngularActuator {
    /// Command the actuator to `angle` degrees
    ///
    /// Angles past the actuator's travel are clamped by the implementation.
    fn command(&mut self, angle: u8);

    /// Last commanded angle
    fn commanded(&self) -> u8;
}
