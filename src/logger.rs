//! Structured logging with box-drawing output.
//!
//! The calculator reports what it collected and resolved through these macros.
//! Output goes to stderr and is disabled by default, since this is a library and
//! the host decides whether it wants the noise (see `Log::set_enabled`).
//!
//! ## Logging Conventions
//!
//! - **`log_decorated!`**: a line inside the current block, printed as `┣ message`.
//! - **`log_indented!`**: nested detail for the line above, printed as `┃   message`.
//! - **`log_pipe!`**: a bare `┃` for vertical spacing before a semantic message.
//! - **`log_debug!`, `log_warning!`**: semantic messages with a `[LEVEL]` tag.
//!
//! When a fixed time source is installed every line carries a `[HH:MM:SS]` prefix
//! with the pinned clock time.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable logging.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Timestamp prefix, only present when the clock is pinned.
    pub fn get_timestamp_prefix() -> String {
        if crate::time_source::is_fixed() {
            format!("[{}] ", crate::time_source::now().format("%H:%M:%S"))
        } else {
            String::new()
        }
    }

    /// Write one line made of the timestamp prefix, a box-drawing marker and the message.
    ///
    /// Called by the logging macros after they have checked `is_enabled`.
    #[doc(hidden)]
    pub fn emit(marker: &str, message: fmt::Arguments<'_>) {
        let line = format!("{}{marker}{message}\n", Self::get_timestamp_prefix());
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }
}

// # Logging Macros

/// Log a decorated message as part of the current block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {
        if $crate::logger::Log::is_enabled() {
            $crate::logger::Log::emit("┣ ", format_args!($fmt $($arg)*));
        }
    };
}

/// Log an indented detail line.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {
        if $crate::logger::Log::is_enabled() {
            $crate::logger::Log::emit("┃   ", format_args!($fmt $($arg)*));
        }
    };
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {
        if $crate::logger::Log::is_enabled() {
            $crate::logger::Log::emit("┃", format_args!(""));
        }
    };
}

/// Log a warning message with yellow level tag.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {
        if $crate::logger::Log::is_enabled() {
            $crate::logger::Log::emit(
                "┣[\x1b[33mWARNING\x1b[0m] ",
                format_args!($fmt $($arg)*),
            );
        }
    };
}

/// Log a debug message with green level tag.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {
        if $crate::logger::Log::is_enabled() {
            $crate::logger::Log::emit(
                "┣[\x1b[32mDEBUG\x1b[0m] ",
                format_args!($fmt $($arg)*),
            );
        }
    };
}
