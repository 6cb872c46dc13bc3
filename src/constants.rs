//! Defaults and limits shared by the calculator and the configuration layer.

// # Transition Window

/// Days collected on each side of the target date (yesterday, today, tomorrow).
pub const DEFAULT_WINDOW_RADIUS_DAYS: u32 = 1;
pub const MINIMUM_WINDOW_RADIUS_DAYS: u32 = 1;
pub const MAXIMUM_WINDOW_RADIUS_DAYS: u32 = 7;

// # Configuration Defaults

pub const DEFAULT_TRANSITION_MODE: &str = "geo";
pub const DEFAULT_SUNRISE: &str = "06:00:00";
pub const DEFAULT_SUNSET: &str = "18:00:00";
pub const TIME_FORMAT: &str = "%H:%M:%S";

// # Ephemeris Sanity Bounds

/// Events further than this from the requested date are treated as "no event".
pub const MAX_EVENT_DISTANCE_HOURS: i64 = 36;
