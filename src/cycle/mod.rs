//! Day/night cycle resolution for a location and instant.
//!
//! A query runs in two steps:
//!
//! 1. [`collector`]: ask the ephemeris for sunrise and sunset on the target date
//!    and the dates around it (yesterday, today, tomorrow by default)
//! 2. [`resolver`]: find the transitions immediately before and after the target
//!    instant and derive the [`CycleSnapshot`] from them
//!
//! Both steps are pure. A snapshot is built once per query and never mutated.

pub mod collector;
pub mod resolver;


use chrono::{DateTime, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::Serialize;
use std::time::Duration as StdDuration;

use crate::config::CycleConfig;
use crate::constants::{
    DEFAULT_WINDOW_RADIUS_DAYS, MAXIMUM_WINDOW_RADIUS_DAYS, MINIMUM_WINDOW_RADIUS_DAYS,
};
use crate::ephemeris::{
    ConfiguredEphemeris, Ephemeris, Horizon, ManualEphemeris, SunriseEphemeris,
};
use crate::error::{CycleError, Result};

pub use collector::collect_transitions;
pub use resolver::resolve;

/// A location on Earth in degrees.
///
/// Only finiteness is checked. Range validation is the ephemeris' business, so
/// out-of-range values are passed through to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Validate and build coordinates. `lat` is checked before `lon`.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() {
            return Err(CycleError::invalid_argument(
                "lat",
                format!("must be a finite number, got {lat}"),
            ));
        }
        if !lon.is_finite() {
            return Err(CycleError::invalid_argument(
                "lon",
                format!("must be a finite number, got {lon}"),
            ));
        }
        Ok(Self { lat, lon })
    }
}

/// The two kinds of day/night boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Sunrise,
    Sunset,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunrise => f.pad("sunrise"),
            Self::Sunset => f.pad("sunset"),
        }
    }
}

/// One sunrise or sunset event.
///
/// `instant` is `None` when the ephemeris had no such event for the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub instant: Option<DateTime<Utc>>,
    pub kind: TransitionKind,
}

impl Transition {
    pub fn new(instant: Option<DateTime<Utc>>, kind: TransitionKind) -> Self {
        Self { instant, kind }
    }
}

/// Where an instant sits in the day/night cycle.
///
/// Exactly one of `is_day` / `is_night` is set, and
/// `ms_since_change + ms_until_change == ms_cycle_length`.
///
/// `sunrise` and `sunset` are the two transitions bracketing the instant, so
/// during the day `sunrise < sunset` and during the night `sunset < sunrise`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSnapshot {
    pub is_day: bool,
    pub is_night: bool,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Milliseconds since the last sunrise/sunset.
    pub ms_since_change: i64,
    /// Milliseconds until the next sunrise/sunset.
    pub ms_until_change: i64,
    /// Length of the current day or night in milliseconds.
    pub ms_cycle_length: i64,
    /// Share of the current day or night already elapsed, 0 to 100.
    pub cycle_percentage: f64,
}

impl CycleSnapshot {
    /// Elapsed share of the cycle as 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        self.cycle_percentage / 100.0
    }

    /// The transition that ends the current cycle.
    pub fn next_transition(&self) -> (DateTime<Utc>, TransitionKind) {
        if self.is_day {
            (self.sunset, TransitionKind::Sunset)
        } else {
            (self.sunrise, TransitionKind::Sunrise)
        }
    }

    /// Time left until the next transition.
    pub fn time_until_change(&self) -> StdDuration {
        StdDuration::from_millis(self.ms_until_change.max(0) as u64)
    }
}

/// Truncate to millisecond precision so differences are whole milliseconds.
pub(crate) fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(3)
}

/// Computes [`CycleSnapshot`]s from an ephemeris and a transition window.
#[derive(Debug, Clone)]
pub struct DayCycleCalculator<E = SunriseEphemeris> {
    ephemeris: E,
    window_radius_days: u32,
}

impl DayCycleCalculator<SunriseEphemeris> {
    /// Calculator using official sunrise/sunset from the `sunrise` crate.
    pub fn new() -> Self {
        Self::with_ephemeris(SunriseEphemeris::new(Horizon::Official))
    }
}

impl Default for DayCycleCalculator<SunriseEphemeris> {
    fn default() -> Self {
        Self::new()
    }
}

impl DayCycleCalculator<ConfiguredEphemeris> {
    /// Build a calculator from a loaded configuration.
    ///
    /// The configuration is validated again here, so a hand-built `CycleConfig`
    /// gets the same checks as one read from disk.
    ///
    /// Logging is process-wide and follows the `debug` flag of the configuration
    /// most recently passed here.
    pub fn from_config(config: &CycleConfig) -> anyhow::Result<Self> {
        crate::config::validation::validate_config(config)?;

        let ephemeris = match config.mode() {
            "manual" => ConfiguredEphemeris::Manual(ManualEphemeris::parse(
                config.sunrise_str(),
                config.sunset_str(),
            )?),
            _ => ConfiguredEphemeris::Geo(SunriseEphemeris::new(
                config.horizon.unwrap_or_default(),
            )),
        };

        crate::logger::Log::set_enabled(config.debug == Some(true));

        Ok(Self::with_ephemeris(ephemeris)
            .with_window_radius_days(config.window_radius_days()))
    }
}

impl<E: Ephemeris> DayCycleCalculator<E> {
    /// Calculator over any ephemeris, with the default one-day window radius.
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self {
            ephemeris,
            window_radius_days: DEFAULT_WINDOW_RADIUS_DAYS,
        }
    }

    /// Set how many days on each side of the target date are collected.
    ///
    /// Values are clamped to the supported range.
    pub fn with_window_radius_days(mut self, radius: u32) -> Self {
        self.window_radius_days =
            radius.clamp(MINIMUM_WINDOW_RADIUS_DAYS, MAXIMUM_WINDOW_RADIUS_DAYS);
        self
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn window_radius_days(&self) -> u32 {
        self.window_radius_days
    }

    /// Resolve the cycle at `at` for the given location.
    ///
    /// The calendar date is taken in `at`'s own time zone. No zone conversion
    /// happens beyond comparing instants.
    pub fn compute<Tz: TimeZone>(
        &self,
        lat: f64,
        lon: f64,
        at: &DateTime<Tz>,
    ) -> Result<CycleSnapshot> {
        let coords = Coordinates::new(lat, lon)?;
        self.compute_for(coords, at.date_naive(), at.with_timezone(&Utc))
    }

    /// Resolve the cycle at the current time (see [`crate::time_source`]).
    pub fn compute_now(&self, lat: f64, lon: f64) -> Result<CycleSnapshot> {
        self.compute(lat, lon, &crate::time_source::now())
    }

    /// Resolve the cycle at a raw Unix timestamp in milliseconds.
    ///
    /// The calendar date is the UTC date of the timestamp.
    pub fn compute_at_millis(&self, lat: f64, lon: f64, at_ms: i64) -> Result<CycleSnapshot> {
        let coords = Coordinates::new(lat, lon)?;
        let at = DateTime::from_timestamp_millis(at_ms).ok_or_else(|| {
            CycleError::invalid_argument(
                "at",
                format!("timestamp {at_ms} ms is outside the representable range"),
            )
        })?;
        self.compute_for(coords, at.date_naive(), at)
    }

    fn compute_for(
        &self,
        coords: Coordinates,
        target_date: NaiveDate,
        target: DateTime<Utc>,
    ) -> Result<CycleSnapshot> {
        let transitions =
            collect_transitions(&self.ephemeris, coords, target_date, self.window_radius_days);

        log_debug!(
            "Collected {} transitions around {target_date} for {:.4}°, {:.4}°",
            transitions.len(),
            coords.lat,
            coords.lon
        );
        for transition in &transitions {
            match transition.instant {
                Some(instant) => log_indented!("{:>7}: {instant}", transition.kind),
                None => log_indented!("{:>7}: none", transition.kind),
            }
        }

        match resolve(target, &transitions) {
            Ok(snapshot) => {
                let (next, kind) = snapshot.next_transition();
                log_decorated!(
                    "{} at {target}, {:.1}% elapsed, {kind} at {next}",
                    if snapshot.is_day { "Day" } else { "Night" },
                    snapshot.cycle_percentage
                );
                Ok(snapshot)
            }
            Err(e) => {
                log_pipe!();
                log_warning!("{e}");
                Err(e)
            }
        }
    }
}

/// Resolve the cycle at `at` with the default calculator.
pub fn compute_cycle<Tz: TimeZone>(
    lat: f64,
    lon: f64,
    at: &DateTime<Tz>,
) -> Result<CycleSnapshot> {
    DayCycleCalculator::new().compute(lat, lon, at)
}

/// Resolve the cycle at the current time with the default calculator.
pub fn compute_cycle_now(lat: f64, lon: f64) -> Result<CycleSnapshot> {
    DayCycleCalculator::new().compute_now(lat, lon)
}
