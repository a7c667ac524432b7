//! Solenoid output trait

/// A single solenoid driver output
///
/// Implementations hide the electrical polarity: `set_energized(true)`
/// always means "pull the plunger", whatever level that takes on the pin.
pub trait SolenoidOutput {
    /// Energize or release the solenoid
    fn set_energized(&mut self, on: bool);

    /// Check if the solenoid is currently energized
    fn is_energized(&self) -> bool;
}
