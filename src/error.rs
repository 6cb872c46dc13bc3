//! Error types for day/night cycle calculations.

use chrono::{DateTime, Utc};

/// Result type alias for cycle calculations.
pub type Result<T> = std::result::Result<T, CycleError>;

/// Why a transition window failed to produce a usable cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DegenerateReason {
    /// No transition in the window lies at or before the target instant.
    #[error("no transition at or before the target instant")]
    NoPastTransition,

    /// No transition in the window lies after the target instant.
    #[error("no transition after the target instant")]
    NoFutureTransition,
}

/// Error type for all fallible cycle operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CycleError {
    /// Returned at the boundary when an input cannot be used.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument (`lat`, `lon` or `at`).
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Returned when the transition window does not bracket the target instant.
    #[error("transition window does not bracket {at}: {reason}")]
    DegenerateCycle {
        /// The target instant of the query.
        at: DateTime<Utc>,
        /// Which side of the bracket is missing.
        reason: DegenerateReason,
    },
}

impl CycleError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(at: DateTime<Utc>, reason: DegenerateReason) -> Self {
        Self::DegenerateCycle { at, reason }
    }

    /// Name of the invalid argument, if this is an argument error.
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { name, .. } => Some(name),
            Self::DegenerateCycle { .. } => None,
        }
    }
}
