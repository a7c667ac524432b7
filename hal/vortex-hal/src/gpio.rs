//! Digital I/O abstractions
//!
//! Infallible pin traits implemented by chip-specific HALs. The gimbal
//! logic never observes a failed read or write; a miswired pin simply
//! reads or drives the wrong level.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Line<'a>(&'a Cell<bool>);

    impl InputPin for Line<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    impl OutputPin for Line<'_> {
        fn set_high(&mut self) {
            self.0.set(true);
        }

        fn set_low(&mut self) {
            self.0.set(false);
        }

        fn is_set_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_output_drives_line() {
        let wire = Cell::new(false);
        let mut out = Line(&wire);

        out.set_high();
        assert!(wire.get());
        assert!(out.is_set_high());

        out.set_low();
        assert!(!wire.get());

        // Loopback: same wire read as an input
        let input = Line(&wire);
        assert!(input.is_low());
        assert!(!(&input).is_high());
    }
}
