#![forbid(unsafe_code)]

//! Logging support.
//!
//! With the `tracing` feature the event macros below are the `tracing` ones.
//! Without it they are exported at the crate root as no-ops that swallow
//! their arguments, so call sites compile unchanged either way.
//!
//! | Level | Emitted by |
//! |-------|------------|
//! | `debug` | registry insert/replace/remove, submit |
//! | `trace` | engine verdicts (pushed or withheld), form state recompute |
//! | `warn` | rejected configuration discriminants |
//!
//! Spans are not used; field names travel as event fields instead.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Swallows a `debug` event.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Swallows an `error` event.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// Swallows an `info` event.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// Swallows a `trace` event.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Swallows a `warn` event.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .try_init()
        .is_ok()
}
