#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! event macros. Without it, same-named no-op macros are provided so call
//! sites can always write `logging::warn!(...)`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, error, info, trace, warn};

// The no-op macros carry distinct names: a bare `macro_rules! warn` imported
// by `use` collides with the builtin `#[warn]` attribute.
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    macro_rules! noop_debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! noop_error {
        ($($arg:tt)*) => {};
    }

    macro_rules! noop_info {
        ($($arg:tt)*) => {};
    }

    macro_rules! noop_trace {
        ($($arg:tt)*) => {};
    }

    macro_rules! noop_warn {
        ($($arg:tt)*) => {};
    }

    pub(crate) use noop_debug as debug;
    pub(crate) use noop_error as error;
    pub(crate) use noop_info as info;
    pub(crate) use noop_trace as trace;
    pub(crate) use noop_warn as warn;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop_macros::{debug, error, info, trace, warn};

#[cfg(test)]
mod tests {
    use super::{debug, error, info, trace, warn};

    #[test]
    fn macros_accept_structured_fields() {
        let count = 3_usize;
        let reason = "boom";
        trace!(count, "trace event");
        debug!(count, ?reason, "debug event");
        info!(count = count + 1, "info event");
        warn!(error = %reason, "warn event");
        error!(error = %reason, count, "error event");
    }
}
