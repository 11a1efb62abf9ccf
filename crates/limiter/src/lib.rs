//! Call-rate limiting for Pacer
//!
//! This crate wraps an action in one of two time-based suppression policies:
//! - [`debounce`]: run once, `delay` after the last call of a burst
//! - [`throttle`]: run on the leading edge, then drop calls for `delay`
//!
//! Each constructor call produces an independent wrapper. Clones of a wrapper
//! share its state.

pub mod debounce;
pub mod throttle;

use pacer_core::{Delay, TokioScheduler};
use std::sync::Arc;

// Re-exports
pub use debounce::{DebouncePhase, Debounced};
pub use throttle::{ThrottlePhase, Throttled};

/// Wrapped user action
pub(crate) type Action<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Debounce `action` on the current tokio runtime
///
/// Fails with [`pacer_core::Error::NoRuntime`] when called outside a runtime.
pub fn debounce<A, F>(action: F, delay: impl Into<Delay>) -> pacer_core::Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let scheduler = TokioScheduler::current()?;
    Ok(Debounced::with_scheduler(action, delay, scheduler))
}

/// Throttle `action` against the tokio clock
pub fn throttle<A, F>(action: F, delay: impl Into<Delay>) -> Throttled<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled::new(action, delay)
}
