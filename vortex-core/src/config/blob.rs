//! Postcard encoding of the gimbal configuration
//!
//! The firmware build script validates `gimbal.toml` and writes it out with
//! [`GimbalConfig::encode`]; the firmware reads it back with
//! [`GimbalConfig::decode`] at boot.

use super::types::{ConfigError, GimbalConfig};

/// Buffer size that always fits an encoded [`GimbalConfig`]
pub const MAX_ENCODED_LEN: usize = 128;

impl GimbalConfig {
    /// Serialize into `buf`, returning the used prefix
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encoding)
    }

    /// Deserialize and validate a configuration blob
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: GimbalConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Encoding)?;
        config.validate()?;
        Ok(config)
    }
}
