//! Transition collection around a target date.

use chrono::{Days, NaiveDate};

use super::{Coordinates, Transition, TransitionKind};
use crate::ephemeris::Ephemeris;

/// Collect sunrise and sunset transitions for the dates around `target_date`.
///
/// For every offset in `-radius..=radius` days the ephemeris is asked for that
/// date's sunrise and then its sunset, so the output holds `2 * (2 * radius + 1)`
/// transitions ordered by day offset and then (sunrise, sunset). Nothing is sorted
/// or deduplicated: chronological order follows from construction order as long as
/// each day's sunrise precedes its sunset and consecutive days do not overlap.
///
/// A shifted date outside chrono's calendar range yields sentinel transitions.
pub fn collect_transitions<E: Ephemeris>(
    ephemeris: &E,
    coords: Coordinates,
    target_date: NaiveDate,
    radius: u32,
) -> Vec<Transition> {
    let radius = i64::from(radius);
    let mut transitions = Vec::with_capacity(2 * (2 * radius as usize + 1));

    for offset in -radius..=radius {
        match shift_date(target_date, offset) {
            Some(date) => {
                transitions.push(Transition::new(
                    ephemeris.sunrise_of(coords.lat, coords.lon, date),
                    TransitionKind::Sunrise,
                ));
                transitions.push(Transition::new(
                    ephemeris.sunset_of(coords.lat, coords.lon, date),
                    TransitionKind::Sunset,
                ));
            }
            None => {
                transitions.push(Transition::new(None, TransitionKind::Sunrise));
                transitions.push(Transition::new(None, TransitionKind::Sunset));
            }
        }
    }

    transitions
}

/// Calendar arithmetic on the day field, letting month and year roll over.
fn shift_date(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
}
