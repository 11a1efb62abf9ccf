//! Leading-edge throttling
//!
//! The first call runs immediately and opens a cooldown window of `delay`.
//! Calls arriving inside the window are dropped, not queued. The window is
//! measured from the last accepted call.

use crate::Action;
use pacer_core::{Clock, Delay, TokioClock};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::trace;

/// Observable state of a throttled callable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottlePhase {
    /// The next call will run
    Ready,
    /// Calls are being dropped until the window closes
    Cooldown,
}

/// Throttled wrapper around an action
///
/// Runs the action in-line on the caller's thread. Cloning yields another
/// handle to the same wrapper.
pub struct Throttled<A, C: Clock = TokioClock> {
    inner: Arc<Inner<A, C>>,
}

struct Inner<A, C> {
    action: Action<A>,
    delay: Delay,
    clock: C,
    /// Last accepted call (`None` until the first call)
    last: Mutex<Option<Instant>>,
}

impl<A> Throttled<A, TokioClock> {
    pub fn new<F>(action: F, delay: impl Into<Delay>) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_clock(action, delay, TokioClock)
    }
}

impl<A, C: Clock> Throttled<A, C> {
    /// Wrap `action` using an explicit clock
    pub fn with_clock<F>(action: F, delay: impl Into<Delay>, clock: C) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                action: Arc::new(action),
                delay: delay.into(),
                clock,
                last: Mutex::new(None),
            }),
        }
    }

    /// Run the action unless the previous accepted call is within `delay`
    ///
    /// Returns `true` when the action ran.
    pub fn call(&self, args: A) -> bool {
        {
            let mut last = self.inner.last.lock();
            let now = self.inner.clock.now();
            if let Some(previous) = *last {
                let elapsed = now.saturating_duration_since(previous);
                if elapsed < self.inner.delay.as_duration() {
                    trace!(
                        "Throttled call dropped ({}ms since last, delay {})",
                        elapsed.as_millis(),
                        self.inner.delay
                    );
                    return false;
                }
            }
            *last = Some(now);
        }

        (self.inner.action)(args);
        true
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> ThrottlePhase {
        let last = self.inner.last.lock();
        match *last {
            Some(previous)
                if self.inner.clock.now().saturating_duration_since(previous)
                    < self.inner.delay.as_duration() =>
            {
                ThrottlePhase::Cooldown
            }
            _ => ThrottlePhase::Ready,
        }
    }

    pub fn delay(&self) -> Delay {
        self.inner.delay
    }

    /// Convert into a plain closure, discarding the accepted/dropped result
    pub fn into_fn(self) -> impl Fn(A) + Clone + Send + Sync + 'static
    where
        A: 'static,
    {
        move |args| {
            self.call(args);
        }
    }
}

impl<A, C: Clock> Clone for Throttled<A, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, C: Clock> fmt::Debug for Throttled<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("delay", &self.inner.delay)
            .field("last", &*self.inner.last.lock())
            .finish()
    }
}
