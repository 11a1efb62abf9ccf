//! Deferred execution of callbacks
//!
//! A [`Scheduler`] can run a callback after a duration, cancel a callback it
//! previously scheduled, and (through [`Clock`]) report the current time.
//! Those three operations are all a debouncer needs from its environment.

use crate::clock::Clock;
use crate::error::{Error, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Stand-in deadline for delays too large to add to an `Instant` (30 years)
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Callback handed to a scheduler
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Timer collaborator used by debounced callables
pub trait Scheduler: Clock {
    /// Token identifying one scheduled callback
    type Handle: Send + 'static;

    /// Run `task` once `delay` has elapsed from now
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Cancel a scheduled callback
    ///
    /// Cancelling a callback that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Scheduler that spawns one sleeping task per callback on a tokio runtime
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Bind to the runtime the caller is currently running on
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|_| Error::NoRuntime)
    }

    /// Bind to an explicit runtime handle
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Clock for TokioScheduler {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule(&self, delay: Duration, task: Task) -> JoinHandle<()> {
        // Deadline is fixed at call time, not when the task is first polled
        let now = Instant::now();
        let deadline = now
            .checked_add(delay)
            .unwrap_or_else(|| now + FAR_FUTURE);
        self.handle.spawn(async move {
            sleep_until(deadline).await;
            task();
        })
    }

    fn cancel(&self, handle: JoinHandle<()>) {
        handle.abort();
    }
}
