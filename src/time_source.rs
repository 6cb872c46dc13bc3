//! Time source abstraction for reading "now".
//!
//! Queries that default their target instant to the current time read the clock
//! through this module, so a host application (or a test) can pin the clock to a
//! fixed instant instead of the system time.

use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to the system clock when never set.
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting the current time.
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Local>;

    /// Check if this source is pinned to a fixed instant
    fn is_fixed(&self) -> bool {
        false
    }
}

/// Real-time implementation backed by the system clock.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that always reports the same instant.
pub struct FixedTimeSource {
    instant: DateTime<Local>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

/// Install the global time source.
///
/// This can only be done once per process; later calls return an error and leave
/// the installed source in place.
pub fn init_time_source(source: Arc<dyn TimeSource>) -> anyhow::Result<()> {
    TIME_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("Time source already initialized"))
}

/// Current time according to the installed source, or the system clock.
pub fn now() -> DateTime<Local> {
    match TIME_SOURCE.get() {
        Some(source) => source.now(),
        None => Local::now(),
    }
}

/// Check whether a time source has been installed.
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Check whether the installed source is pinned to a fixed instant.
pub fn is_fixed() -> bool {
    TIME_SOURCE.get().is_some_and(|source| source.is_fixed())
}
