//! Ephemeris providers: where sunrise and sunset instants come from.
//!
//! The cycle calculator never does astronomy itself. It asks an [`Ephemeris`]
//! for one sunrise and one sunset per calendar date and works from those.
//!
//! ## Providers
//!
//! - [`solar`]: astronomical events from the `sunrise` crate, with a selectable
//!   horizon (official sunrise/sunset or civil/nautical/astronomical twilight)
//! - [`manual`]: fixed UTC times of day, identical for every date
//!
//! [`ConfiguredEphemeris`] wraps either one so a calculator built from a
//! configuration file has a single concrete type.

pub mod manual;
pub mod solar;

use chrono::{DateTime, NaiveDate, Utc};

pub use manual::ManualEphemeris;
pub use solar::{Horizon, SunriseEphemeris};

/// Source of sunrise and sunset instants.
///
/// Implementations are expected to be pure: the same coordinates and date always
/// give the same answer. `None` is the "no such event on this date" sentinel, for
/// example during polar day or night; the calculator passes it through untouched.
#[cfg_attr(test, mockall::automock)]
pub trait Ephemeris {
    /// Sunrise for the given calendar date and location.
    fn sunrise_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>>;

    /// Sunset for the given calendar date and location.
    fn sunset_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sunrise_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        (**self).sunrise_of(lat, lon, date)
    }

    fn sunset_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        (**self).sunset_of(lat, lon, date)
    }
}

/// Ephemeris selected by `transition_mode` in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguredEphemeris {
    /// Astronomical events from the `sunrise` crate
    Geo(SunriseEphemeris),
    /// Fixed times of day
    Manual(ManualEphemeris),
}

impl Ephemeris for ConfiguredEphemeris {
    fn sunrise_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        match self {
            Self::Geo(ephemeris) => ephemeris.sunrise_of(lat, lon, date),
            Self::Manual(ephemeris) => ephemeris.sunrise_of(lat, lon, date),
        }
    }

    fn sunset_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        match self {
            Self::Geo(ephemeris) => ephemeris.sunset_of(lat, lon, date),
            Self::Manual(ephemeris) => ephemeris.sunset_of(lat, lon, date),
        }
    }
}
