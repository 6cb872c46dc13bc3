//! Astronomical sunrise/sunset from the `sunrise` crate.
//!
//! The crate always hands back an instant, even on dates where the sun never
//! crosses the requested horizon. Those results land far away from the requested
//! date (or collapse onto the epoch), so a date only gets events when both lie
//! within `MAX_EVENT_DISTANCE_HOURS` of noon UTC and the morning one comes first.
//! Otherwise both are reported as `None`.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use sunrise::{Coordinates, DawnType, SolarDay, SolarEvent};

use super::Ephemeris;
use crate::constants::MAX_EVENT_DISTANCE_HOURS;

/// Which solar elevation counts as the day/night boundary.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// Upper limb of the sun on the horizon, corrected for refraction.
    #[default]
    Official,
    /// Sun 6° below the horizon.
    Civil,
    /// Sun 12° below the horizon.
    Nautical,
    /// Sun 18° below the horizon.
    Astronomical,
}

impl Horizon {
    fn morning_event(self) -> SolarEvent {
        match self {
            Self::Official => SolarEvent::Sunrise,
            Self::Civil => SolarEvent::Dawn(DawnType::Civil),
            Self::Nautical => SolarEvent::Dawn(DawnType::Nautical),
            Self::Astronomical => SolarEvent::Dawn(DawnType::Astronomical),
        }
    }

    fn evening_event(self) -> SolarEvent {
        match self {
            Self::Official => SolarEvent::Sunset,
            Self::Civil => SolarEvent::Dusk(DawnType::Civil),
            Self::Nautical => SolarEvent::Dusk(DawnType::Nautical),
            Self::Astronomical => SolarEvent::Dusk(DawnType::Astronomical),
        }
    }
}

/// Ephemeris backed by the `sunrise` crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SunriseEphemeris {
    pub horizon: Horizon,
}

impl SunriseEphemeris {
    pub fn new(horizon: Horizon) -> Self {
        Self { horizon }
    }

    /// Morning and evening crossings for `date`, or `None` if the sun does not
    /// cross the horizon that day.
    fn crossings(
        &self,
        lat: f64,
        lon: f64,
        date: NaiveDate,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        // Rejects non-finite and out-of-range coordinates
        let coord = Coordinates::new(lat, lon)?;
        let day = SolarDay::new(coord, date);
        let morning = day.event_time(self.horizon.morning_event());
        let evening = day.event_time(self.horizon.evening_event());

        // A day without a crossing shows up as an implausible instant or as a
        // morning that does not precede the evening
        let crosses = is_plausible_for_date(morning, date)
            && is_plausible_for_date(evening, date)
            && morning < evening;
        crosses.then_some((morning, evening))
    }
}

/// Whether an event instant plausibly belongs to the given calendar date.
fn is_plausible_for_date(instant: DateTime<Utc>, date: NaiveDate) -> bool {
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
    let distance = instant.naive_utc().signed_duration_since(noon);
    distance.abs() <= Duration::hours(MAX_EVENT_DISTANCE_HOURS)
}

impl Ephemeris for SunriseEphemeris {
    fn sunrise_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.crossings(lat, lon, date).map(|(morning, _)| morning)
    }

    fn sunset_of(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.crossings(lat, lon, date).map(|(_, evening)| evening)
    }
}
