use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::{Europe::London, Pacific::Kiritimati};
use dayflow::config::from_toml_str;
use dayflow::ephemeris::ConfiguredEphemeris;
use dayflow::{CycleError, DayCycleCalculator, DegenerateReason, ManualEphemeris};

// Helper function to build a manual mode calculator the way a host application would
fn create_manual_calculator(
    sunrise: &str,
    sunset: &str,
) -> DayCycleCalculator<ConfiguredEphemeris> {
    let content = format!(
        "transition_mode = \"manual\"\nsunrise = \"{sunrise}\"\nsunset = \"{sunset}\"\n"
    );
    let config = from_toml_str(&content).unwrap();
    DayCycleCalculator::from_config(&config).unwrap()
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

const HOUR_MS: i64 = 3_600_000;

#[test]
fn test_midday_is_halfway_through_the_day() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");
    let snapshot = calculator
        .compute(48.8566, 2.3522, &utc(2024, 6, 21, 12, 0, 0))
        .unwrap();

    assert!(snapshot.is_day);
    assert!(!snapshot.is_night);
    assert_eq!(snapshot.sunrise, utc(2024, 6, 21, 6, 0, 0));
    assert_eq!(snapshot.sunset, utc(2024, 6, 21, 18, 0, 0));
    assert_eq!(snapshot.ms_since_change, 6 * HOUR_MS);
    assert_eq!(snapshot.ms_until_change, 6 * HOUR_MS);
    assert_eq!(snapshot.ms_cycle_length, 12 * HOUR_MS);
    assert_eq!(snapshot.cycle_percentage, 50.0);
}

#[test]
fn test_exact_sunrise_starts_the_day() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");
    let snapshot = calculator
        .compute(48.8566, 2.3522, &utc(2024, 6, 21, 6, 0, 0))
        .unwrap();

    assert!(snapshot.is_day);
    assert_eq!(snapshot.ms_since_change, 0);
    assert_eq!(snapshot.cycle_percentage, 0.0);
    assert_eq!(snapshot.ms_until_change, 12 * HOUR_MS);
}

#[test]
fn test_late_evening_counts_down_to_next_sunrise() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");
    let snapshot = calculator
        .compute(48.8566, 2.3522, &utc(2024, 6, 21, 23, 0, 0))
        .unwrap();

    assert!(snapshot.is_night);
    assert_eq!(snapshot.sunset, utc(2024, 6, 21, 18, 0, 0));
    assert_eq!(snapshot.sunrise, utc(2024, 6, 22, 6, 0, 0));
    assert_eq!(snapshot.ms_until_change, 7 * HOUR_MS);
    assert_eq!(snapshot.time_until_change().as_secs(), 7 * 3600);
}

#[test]
fn test_non_numeric_latitude_rejected() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");
    let err = calculator
        .compute(f64::NAN, 2.3522, &utc(2024, 6, 21, 12, 0, 0))
        .unwrap_err();

    assert!(matches!(err, CycleError::InvalidArgument { name: "lat", .. }));
}

#[test]
fn test_uneven_manual_times() {
    let calculator = create_manual_calculator("04:30:00", "21:30:00");
    let snapshot = calculator
        .compute(0.0, 0.0, &utc(2024, 6, 21, 2, 0, 0))
        .unwrap();

    // Night runs 21:30 to 04:30, 7 hours, and 02:00 is 4.5 hours in
    assert!(snapshot.is_night);
    assert_eq!(snapshot.ms_cycle_length, 7 * HOUR_MS);
    assert_eq!(snapshot.ms_since_change, 4 * HOUR_MS + HOUR_MS / 2);
}

#[test]
fn test_named_zone_gives_same_instant() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");

    // 13:00 BST is 12:00 UTC
    let london = London.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap();
    let from_zone = calculator.compute(51.5074, -0.1278, &london).unwrap();
    let from_utc = calculator
        .compute(51.5074, -0.1278, &utc(2024, 6, 21, 12, 0, 0))
        .unwrap();

    assert_eq!(from_zone, from_utc);
    assert_eq!(from_zone.cycle_percentage, 50.0);
}

#[test]
fn test_zone_date_ahead_of_utc_still_brackets() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");

    // 01:00 on the 21st at UTC+14 is 11:00 on the 20th in UTC
    let kiritimati = Kiritimati.with_ymd_and_hms(2024, 6, 21, 1, 0, 0).unwrap();
    let snapshot = calculator.compute(1.87, -157.4, &kiritimati).unwrap();

    assert!(snapshot.is_day);
    assert_eq!(snapshot.sunrise, utc(2024, 6, 20, 6, 0, 0));
    assert_eq!(snapshot.sunset, utc(2024, 6, 20, 18, 0, 0));
    assert_eq!(snapshot.ms_since_change, 5 * HOUR_MS);
}

#[test]
fn test_far_zone_with_late_manual_times_needs_wider_window() {
    // 00:30 on the 21st at UTC+14 is 10:30 on the 20th in UTC, while the local date
    // puts the window at the 20th to the 22nd. Every event in it is later than `at`.
    let kiritimati = Kiritimati.with_ymd_and_hms(2024, 6, 21, 0, 30, 0).unwrap();

    let calculator = create_manual_calculator("23:00:00", "23:30:00");
    let err = calculator.compute(1.87, -157.4, &kiritimati).unwrap_err();
    assert_eq!(
        err,
        CycleError::DegenerateCycle {
            at: utc(2024, 6, 20, 10, 30, 0),
            reason: DegenerateReason::NoPastTransition,
        }
    );

    let wider = DayCycleCalculator::with_ephemeris(
        ManualEphemeris::parse("23:00:00", "23:30:00").unwrap(),
    )
    .with_window_radius_days(2);
    let snapshot = wider.compute(1.87, -157.4, &kiritimati).unwrap();

    assert!(snapshot.is_night);
    assert_eq!(snapshot.sunset, utc(2024, 6, 19, 23, 30, 0));
    assert_eq!(snapshot.sunrise, utc(2024, 6, 20, 23, 0, 0));
}

#[test]
fn test_snapshot_serializes_for_hosts() {
    let calculator = create_manual_calculator("06:00:00", "18:00:00");
    let snapshot = calculator
        .compute(0.0, 0.0, &utc(2024, 6, 21, 15, 0, 0))
        .unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["isDay"], true);
    assert_eq!(json["msUntilChange"], 3 * HOUR_MS);
    assert_eq!(json["cyclePercentage"], 75.0);
}
