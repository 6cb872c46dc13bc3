//! Fixed-time ephemeris.
//!
//! Every date gets the same sunrise and sunset time of day, interpreted as UTC.
//! Coordinates are ignored. Useful when a host wants a schedule rather than the
//! real sun, and for deterministic tests.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::Ephemeris;
use crate::constants::TIME_FORMAT;

/// Sunrise and sunset at fixed UTC times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualEphemeris {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

impl ManualEphemeris {
    pub fn new(sunrise: NaiveTime, sunset: NaiveTime) -> Self {
        Self { sunrise, sunset }
    }

    /// Parse `HH:MM:SS` strings, as written in the configuration file.
    pub fn parse(sunrise: &str, sunset: &str) -> Result<Self> {
        let sunrise = NaiveTime::parse_from_str(sunrise, TIME_FORMAT)
            .with_context(|| format!("Invalid sunrise time format: {sunrise:?}"))?;
        let sunset = NaiveTime::parse_from_str(sunset, TIME_FORMAT)
            .with_context(|| format!("Invalid sunset time format: {sunset:?}"))?;
        Ok(Self::new(sunrise, sunset))
    }
}

impl Ephemeris for ManualEphemeris {
    fn sunrise_of(&self, _lat: f64, _lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        Some(date.and_time(self.sunrise).and_utc())
    }

    fn sunset_of(&self, _lat: f64, _lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        Some(date.and_time(self.sunset).and_utc())
    }
}
