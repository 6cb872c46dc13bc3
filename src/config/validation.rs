//! Configuration validation functionality.
//!
//! Rejects configurations that cannot produce a working calculator: unknown modes,
//! unparseable manual times, a manual day that ends before it starts, and window
//! radii outside the supported range.

use anyhow::{Context, Result};
use chrono::NaiveTime;

use super::CycleConfig;
use crate::constants::*;

/// Validate a configuration, naming the offending field on failure.
pub fn validate_config(config: &CycleConfig) -> Result<()> {
    let radius = config.window_radius_days();
    if !(MINIMUM_WINDOW_RADIUS_DAYS..=MAXIMUM_WINDOW_RADIUS_DAYS).contains(&radius) {
        anyhow::bail!(
            "window_radius_days ({}) must be between {} and {} days",
            radius,
            MINIMUM_WINDOW_RADIUS_DAYS,
            MAXIMUM_WINDOW_RADIUS_DAYS
        );
    }

    match config.mode() {
        "geo" => {
            if config.sunrise.is_some() || config.sunset.is_some() {
                log_pipe!();
                log_warning!("sunrise/sunset are only used in manual mode and will be ignored");
            }
            Ok(())
        }
        "manual" => validate_manual_times(config),
        other => anyhow::bail!(
            "transition_mode ({:?}) must be either \"geo\" or \"manual\"",
            other
        ),
    }
}

fn validate_manual_times(config: &CycleConfig) -> Result<()> {
    let sunrise = NaiveTime::parse_from_str(config.sunrise_str(), TIME_FORMAT)
        .context("Invalid sunrise time format")?;
    let sunset = NaiveTime::parse_from_str(config.sunset_str(), TIME_FORMAT)
        .context("Invalid sunset time format")?;

    // Each date's sunrise must come before its sunset or the window loses its order
    if sunrise >= sunset {
        anyhow::bail!(
            "sunrise ({}) must be earlier than sunset ({})",
            config.sunrise_str(),
            config.sunset_str()
        );
    }

    if config.horizon.is_some() {
        log_pipe!();
        log_warning!("horizon is only used in geo mode and will be ignored");
    }

    Ok(())
}
