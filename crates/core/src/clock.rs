//! Time sources
//!
//! Instants come from `tokio::time` so that tests running on a paused runtime
//! see virtual time. Outside a runtime `tokio::time::Instant::now()` reads the
//! ordinary monotonic clock.

use tokio::time::Instant;

/// Source of the current time
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// Monotonic clock backed by `tokio::time::Instant`
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
