//! Configuration loading
//!
//! `build.rs` validates `gimbal.toml` and embeds it as a postcard blob. The
//! blob is decoded once at boot.

use defmt::*;

use vortex_core::config::GimbalConfig;

/// Configuration compiled into the firmware
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/gimbal.bin"));

/// Decode the embedded configuration
///
/// Falls back to the reference wiring if the blob does not decode, which
/// only happens if the build script and firmware disagree on the format.
pub fn load() -> GimbalConfig {
    match GimbalConfig::decode(EMBEDDED_CONFIG) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Embedded config invalid: {:?}, using defaults", e);
            GimbalConfig::default()
        }
    }
}

fn log_config_summary(config: &GimbalConfig) {
    info!(
        "Config: pan a={} b={} tilt a={} b={} trigger={}",
        config.pan.pin_a.pin,
        config.pan.pin_b.pin,
        config.tilt.pin_a.pin,
        config.tilt.pin_b.pin,
        config.trigger.pin
    );
    info!(
        "Config: {} solenoids, fire {}ms on / {}ms off",
        config.solenoids.len(),
        config.fire.high_ms,
        config.fire.low_ms
    );
    debug!(
        "Config: step pan={} tilt={}, bounds pan={}..{} tilt={}..{}",
        config.pan.step,
        config.tilt.step,
        config.pan.lower_bound,
        config.pan.upper_bound,
        config.tilt.lower_bound,
        config.tilt.upper_bound
    );
}
