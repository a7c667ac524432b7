//! Build script for vortex-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates gimbal.toml, then embeds it as a postcard blob

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use vortex_core::config::{ConfigError, GimbalConfig, MAX_ENCODED_LEN};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    embed_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse gimbal.toml and write the encoded config to `OUT_DIR/gimbal.bin`
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=gimbal.toml");

    let config_path = Path::new("gimbal.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: gimbal.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a gimbal.toml configuration file.         ║\n\
            ║  Please create one in the vortex-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read gimbal.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse straight into the firmware's config type
    let config: GimbalConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid gimbal.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid gimbal configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(e))
        );
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let encoded = match config.encode(&mut buf) {
        Ok(encoded) => encoded,
        Err(_) => panic!("gimbal.toml does not fit in {} bytes", MAX_ENCODED_LEN),
    };

    let mut f = File::create(out_dir.join("gimbal.bin")).unwrap();
    f.write_all(encoded).unwrap();

    println!(
        "cargo:warning=gimbal.toml validated successfully ({} bytes)",
        encoded.len()
    );
}

/// Human readable description of a validation error
fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::UnsupportedVersion(v) => {
            format!("version {} is not supported", v)
        }
        ConfigError::ZeroStep => "axis step must be at least 1".to_string(),
        ConfigError::InvertedBounds => {
            "axis lower_bound must not exceed upper_bound".to_string()
        }
        ConfigError::BoundOutOfRange => {
            "axis upper_bound exceeds servo travel_deg".to_string()
        }
        ConfigError::EmptyBank => "at least one [[solenoids]] entry is required".to_string(),
        ConfigError::DuplicatePin(pin) => format!("gpio{} is assigned more than once", pin),
        ConfigError::InvalidPulseRange => {
            "servo pulse range must be non-empty and fit in period_us".to_string()
        }
        ConfigError::Encoding => "configuration could not be encoded".to_string(),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
