//! Vortex Hardware Abstraction Layer
//!
//! Digital I/O traits implemented by chip-specific HALs, so the gimbal
//! logic in `vortex-core` runs unchanged on the board and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vortex-firmware / vortex-core          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vortex-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ vortex-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! Timing uses `embedded_hal::delay::DelayNs` directly; PWM uses
//! `embedded_hal::pwm::SetDutyCycle`.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, OutputPin};
