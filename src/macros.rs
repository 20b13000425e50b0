//! Logging shims over `tracing`.
//!
//! With the `tracing` feature enabled these forward to the matching
//! `tracing` macro; without it they expand to nothing, so call sites never
//! need their own `#[cfg]`.

/// Emits a `TRACE` level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `DEBUG` level event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
