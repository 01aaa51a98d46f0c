//! Logging for rowdex
//!
//! All events go through `tracing` under the `rowdex` target and carry an
//! UPPER_SNAKE `event` field plus a `component` field.
//!
//! The library never installs a subscriber. The `rowdex` binary sets one up
//! in `cli::init_logging`; embedding applications configure their own.

/// Target for all rowdex log events.
pub(crate) const ROWDEX_TARGET: &str = "rowdex";

/// Trace-level event. Used on hot paths such as selector catch-up.
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::ROWDEX_TARGET, $($field)*)
    };
}

/// Debug-level event.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "query",
///     event = "QUERY_PLANNED",
///     strategy = %plan.strategy,
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::ROWDEX_TARGET, $($field)*)
    };
}

/// Info-level event.
macro_rules! log_info {
    ($($field:tt)*) => {
        ::tracing::info!(target: $crate::observability::ROWDEX_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_info;
pub(crate) use log_trace;
