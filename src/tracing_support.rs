//! Logging glue.
//!
//! With the `tracing` feature enabled, the crate logs through the `tracing`
//! macros re-exported here.  Without it, the same macro names expand to
//! nothing so call sites compile unchanged.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::fmt;

    /// Installs a formatting subscriber that writes through the test harness.
    /// Safe to call any number of times; only the first call has an effect,
    /// and an already-installed global subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = fmt()
                .with_test_writer()
                .with_target(false)
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
