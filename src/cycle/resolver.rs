//! Selecting the bracketing transitions and deriving the snapshot.

use chrono::{DateTime, Utc};

use super::{CycleSnapshot, Transition, TransitionKind, truncate_to_millis};
use crate::error::{CycleError, DegenerateReason, Result};

/// Resolve the cycle containing `target` from an ordered transition sequence.
///
/// # Scan invariant
///
/// One linear pass keeps two values:
/// - `past`: the *last* transition seen with `instant <= target`, overwritten on
///   every qualifying transition
/// - `future`: the *first* transition seen with `instant > target`, never
///   overwritten once set
///
/// These are the nearest transition at or before the target and the nearest one
/// strictly after it only if `transitions` is chronologically non-decreasing. The
/// collector's window gives that ordering for every location where each day has a
/// sunrise before its sunset. Sentinel (`None`) transitions match neither side.
///
/// A target equal to a transition instant belongs to the cycle that transition
/// starts.
///
/// All instants are truncated to whole milliseconds before comparing, so
/// `past <= target < future` holds in whole milliseconds and the cycle is at least
/// one millisecond long. Transitions that coincide within a millisecond collapse onto the
/// same side of the target instead of producing a zero-length cycle.
pub fn resolve(target: DateTime<Utc>, transitions: &[Transition]) -> Result<CycleSnapshot> {
    let target = truncate_to_millis(target);
    let mut past: Option<(DateTime<Utc>, TransitionKind)> = None;
    let mut future: Option<(DateTime<Utc>, TransitionKind)> = None;

    for transition in transitions {
        let Some(instant) = transition.instant.map(truncate_to_millis) else {
            continue;
        };
        if instant <= target {
            past = Some((instant, transition.kind));
        }
        if future.is_none() && instant > target {
            future = Some((instant, transition.kind));
        }
    }

    let (past_instant, past_kind) =
        past.ok_or_else(|| CycleError::degenerate(target, DegenerateReason::NoPastTransition))?;
    let (future_instant, _) = future
        .ok_or_else(|| CycleError::degenerate(target, DegenerateReason::NoFutureTransition))?;

    let is_day = past_kind == TransitionKind::Sunrise;
    let (sunrise, sunset) = if is_day {
        (past_instant, future_instant)
    } else {
        (future_instant, past_instant)
    };

    let ms_since_change = (target - past_instant).num_milliseconds();
    let ms_until_change = (future_instant - target).num_milliseconds();
    let ms_cycle_length = (future_instant - past_instant).num_milliseconds();

    debug_assert!(ms_cycle_length > 0);

    let cycle_percentage = ms_since_change as f64 / ms_cycle_length as f64 * 100.0;

    Ok(CycleSnapshot {
        is_day,
        is_night: !is_day,
        sunrise,
        sunset,
        ms_since_change,
        ms_until_change,
        ms_cycle_length,
        cycle_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, h, m, 0).unwrap()
    }

    fn rise(instant: DateTime<Utc>) -> Transition {
        Transition::new(Some(instant), TransitionKind::Sunrise)
    }

    fn set(instant: DateTime<Utc>) -> Transition {
        Transition::new(Some(instant), TransitionKind::Sunset)
    }

    #[test]
    fn test_last_past_and_first_future_win() {
        let transitions = [rise(at(1, 0)), set(at(2, 0)), rise(at(3, 0)), set(at(4, 0))];
        let snapshot = resolve(at(2, 30), &transitions).unwrap();

        assert!(snapshot.is_night);
        assert_eq!(snapshot.sunset, at(2, 0));
        assert_eq!(snapshot.sunrise, at(3, 0));
        assert_eq!(snapshot.ms_since_change, 30 * 60 * 1000);
        assert_eq!(snapshot.ms_until_change, 30 * 60 * 1000);
        assert_eq!(snapshot.cycle_percentage, 50.0);
    }

    #[test]
    fn test_sentinels_are_skipped() {
        let transitions = [
            Transition::new(None, TransitionKind::Sunrise),
            set(at(2, 0)),
            Transition::new(None, TransitionKind::Sunrise),
            set(at(6, 0)),
        ];
        let snapshot = resolve(at(3, 0), &transitions).unwrap();

        assert!(snapshot.is_night);
        assert_eq!(snapshot.sunset, at(2, 0));
        // The next transition is another sunset; it is still reported as "sunrise"
        assert_eq!(snapshot.sunrise, at(6, 0));
        assert_eq!(snapshot.ms_cycle_length, 4 * 3_600_000);
    }

    #[test]
    fn test_no_past_transition() {
        let transitions = [rise(at(6, 0)), set(at(18, 0))];
        let err = resolve(at(5, 0), &transitions).unwrap_err();
        assert_eq!(
            err,
            CycleError::degenerate(at(5, 0), DegenerateReason::NoPastTransition)
        );
    }

    #[test]
    fn test_no_future_transition() {
        let transitions = [rise(at(6, 0)), set(at(18, 0))];
        let err = resolve(at(18, 0), &transitions).unwrap_err();
        assert_eq!(
            err,
            CycleError::degenerate(at(18, 0), DegenerateReason::NoFutureTransition)
        );
    }

    #[test]
    fn test_empty_sequence() {
        let err = resolve(at(12, 0), &[]).unwrap_err();
        assert!(matches!(
            err,
            CycleError::DegenerateCycle {
                reason: DegenerateReason::NoPastTransition,
                ..
            }
        ));
    }

    #[test]
    fn test_sub_millisecond_bracket_never_divides_by_zero() {
        // Past and future straddle the target inside one millisecond. After
        // truncation both sit at the target, so the target opens a new cycle and
        // nothing remains in the future.
        let base = at(12, 0);
        let past = base + chrono::Duration::microseconds(100);
        let target = base + chrono::Duration::microseconds(400);
        let future = base + chrono::Duration::microseconds(900);
        let transitions = [rise(past), set(future)];

        let err = resolve(target, &transitions).unwrap_err();
        assert_eq!(
            err,
            CycleError::degenerate(base, DegenerateReason::NoFutureTransition)
        );
    }

    #[test]
    fn test_one_millisecond_cycle() {
        let base = at(12, 0);
        let transitions = [
            rise(base),
            set(base + chrono::Duration::milliseconds(1)),
        ];

        let snapshot = resolve(base, &transitions).unwrap();
        assert_eq!(snapshot.ms_cycle_length, 1);
        assert_eq!(snapshot.ms_since_change, 0);
        assert_eq!(snapshot.ms_until_change, 1);
        assert_eq!(snapshot.cycle_percentage, 0.0);
    }

    #[test]
    fn test_sub_millisecond_precision_is_dropped() {
        let transitions = [rise(at(6, 0)), set(at(18, 0))];
        let target = at(12, 0) + chrono::Duration::microseconds(999);

        let snapshot = resolve(target, &transitions).unwrap();
        assert_eq!(snapshot.ms_since_change, 6 * 3_600_000);
        assert_eq!(
            snapshot.ms_since_change + snapshot.ms_until_change,
            snapshot.ms_cycle_length
        );
    }
}
