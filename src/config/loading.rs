//! Configuration loading functionality.
//!
//! Reads TOML from disk or a string, applies defaults and validates.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::CycleConfig;
use super::validation::validate_config;
use crate::constants::*;

/// Load and validate a configuration file.
pub fn load_from_path(path: &Path) -> Result<CycleConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    from_toml_str(&content)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Parse, default and validate configuration text.
pub fn from_toml_str(content: &str) -> Result<CycleConfig> {
    let mut config: CycleConfig =
        toml::from_str(content).context("Failed to parse config as TOML")?;

    apply_defaults(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Fill unset fields. Manual times are only defaulted in manual mode.
fn apply_defaults(config: &mut CycleConfig) {
    if config.transition_mode.is_none() {
        config.transition_mode = Some(DEFAULT_TRANSITION_MODE.to_string());
    }

    if config.window_radius_days.is_none() {
        config.window_radius_days = Some(DEFAULT_WINDOW_RADIUS_DAYS);
    }

    if config.debug.is_none() {
        config.debug = Some(false);
    }

    match config.transition_mode.as_deref() {
        Some("manual") => {
            if config.sunrise.is_none() {
                config.sunrise = Some(DEFAULT_SUNRISE.to_string());
            }
            if config.sunset.is_none() {
                config.sunset = Some(DEFAULT_SUNSET.to_string());
            }
        }
        _ => {
            if config.horizon.is_none() {
                config.horizon = Some(Default::default());
            }
        }
    }
}
