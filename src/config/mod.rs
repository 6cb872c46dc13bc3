//! Configuration for building a `DayCycleCalculator` from a TOML file.
//!
//! Every field is optional; the loader fills in defaults and then validates the
//! result, so a config returned by [`load_from_path`] is always usable.
//!
//! ```toml
//! #[Ephemeris]
//! transition_mode = "geo"   # Select: "geo" (astronomical) or "manual" (fixed times)
//! horizon = "official"      # geo only: "official", "civil", "nautical", "astronomical"
//!
//! #[Manual transitions]
//! sunrise = "06:00:00"      # UTC time of sunrise for every date (HH:MM:SS)
//! sunset = "18:00:00"       # UTC time of sunset for every date (HH:MM:SS)
//!
//! #[Window]
//! window_radius_days = 1    # Days collected on each side of the target date (1-7)
//!
//! #[Logging]
//! debug = false             # Print collected transitions and resolved cycles to stderr
//! ```

pub mod loading;
pub mod validation;


use serde::Deserialize;

use crate::constants::*;
use crate::ephemeris::Horizon;

pub use loading::{from_toml_str, load_from_path};
pub use validation::validate_config;

/// Calculator configuration as read from TOML.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct CycleConfig {
    /// "geo" or "manual"
    pub transition_mode: Option<String>,
    /// Solar elevation used as the day/night boundary in geo mode
    pub horizon: Option<Horizon>,
    /// Manual sunrise time (HH:MM:SS, UTC)
    pub sunrise: Option<String>,
    /// Manual sunset time (HH:MM:SS, UTC)
    pub sunset: Option<String>,
    /// Days collected on each side of the target date
    pub window_radius_days: Option<u32>,
    /// Enable debug logging
    pub debug: Option<bool>,
}

impl CycleConfig {
    pub fn mode(&self) -> &str {
        self.transition_mode
            .as_deref()
            .unwrap_or(DEFAULT_TRANSITION_MODE)
    }

    pub fn sunrise_str(&self) -> &str {
        self.sunrise.as_deref().unwrap_or(DEFAULT_SUNRISE)
    }

    pub fn sunset_str(&self) -> &str {
        self.sunset.as_deref().unwrap_or(DEFAULT_SUNSET)
    }

    pub fn window_radius_days(&self) -> u32 {
        self.window_radius_days.unwrap_or(DEFAULT_WINDOW_RADIUS_DAYS)
    }
}
