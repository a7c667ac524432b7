//! Configuration types
//!
//! Board-agnostic configuration structures, embedded in the firmware as
//! postcard binary data.

#[cfg(feature = "serde")]
pub mod blob;
pub mod hardware;
pub mod types;

#[cfg(feature = "serde")]
pub use blob::MAX_ENCODED_LEN;
pub use hardware::*;
pub use types::*;
