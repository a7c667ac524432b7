//! Momentary trigger input trait

/// The operator's fire button
pub trait TriggerInput {
    /// Check if the button is currently asserted
    ///
    /// This is a raw sample. There is no debouncing or edge detection.
    fn is_asserted(&self) -> bool;
}
