//! # Dayflow
//!
//! Where a moment sits in the day/night cycle of a location.
//!
//! Given a latitude, a longitude and an instant, dayflow reports whether it is day
//! or night, the sunrise and sunset bracketing the instant, and how far through
//! the current day or night it is.
//!
//! ## Architecture
//!
//! - **Cycle**: `cycle` collects transitions around the target date and resolves
//!   the bracketing pair into a `CycleSnapshot`
//! - **Ephemeris**: `ephemeris` supplies sunrise/sunset instants, either from the
//!   `sunrise` crate or from fixed manual times
//! - **Configuration**: `config` builds a calculator from a TOML file
//! - **Infrastructure**: error types, the time source used for "now", and logging
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//!
//! let at = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
//! let snapshot = dayflow::compute_cycle(52.52, 13.405, &at)?;
//! println!("day: {}, {:.1}% elapsed", snapshot.is_day, snapshot.cycle_percentage);
//! # Ok::<(), dayflow::CycleError>(())
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod config;
pub mod constants;
pub mod cycle;
pub mod ephemeris;
pub mod error;
pub mod time_source;

pub use cycle::{
    Coordinates, CycleSnapshot, DayCycleCalculator, Transition, TransitionKind, compute_cycle,
    compute_cycle_now,
};
pub use ephemeris::{Ephemeris, Horizon, ManualEphemeris, SunriseEphemeris};
pub use error::{CycleError, DegenerateReason, Result};
