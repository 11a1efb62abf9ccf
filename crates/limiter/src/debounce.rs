//! Trailing-edge debouncing
//!
//! Every call cancels the pending execution (if any) and schedules a new one
//! `delay` from now, so a burst of calls collapses into a single execution
//! carrying the arguments of the last call.

use crate::Action;
use pacer_core::{Delay, Scheduler, TokioScheduler};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Observable state of a debounced callable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePhase {
    /// No execution scheduled
    Idle,
    /// An execution is scheduled and will run unless superseded
    Pending,
}

/// Debounced wrapper around an action
///
/// At most one execution is pending at any time. Cloning yields another
/// handle to the same wrapper.
pub struct Debounced<A, S: Scheduler = TokioScheduler> {
    inner: Arc<Inner<A, S>>,
}

struct Inner<A, S: Scheduler> {
    action: Action<A>,
    delay: Delay,
    scheduler: S,
    slot: Mutex<Slot<S::Handle>>,
}

/// Pending-timer bookkeeping
///
/// `generation` is bumped by every call; `fired` records the last generation
/// whose execution ran. The wrapper is pending while they differ.
struct Slot<H> {
    generation: u64,
    fired: u64,
    pending: Option<H>,
}

impl<A, S> Debounced<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Wrap `action` using an explicit scheduler
    pub fn with_scheduler<F>(action: F, delay: impl Into<Delay>, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let delay = delay.into();
        debug!("Created debouncer (delay: {})", delay);

        Self {
            inner: Arc::new(Inner {
                action: Arc::new(action),
                delay,
                scheduler,
                slot: Mutex::new(Slot {
                    generation: 0,
                    fired: 0,
                    pending: None,
                }),
            }),
        }
    }

    /// Register a call, (re)starting the wait window
    pub fn call(&self, args: A) {
        let generation = {
            let mut slot = self.inner.slot.lock();
            if let Some(previous) = slot.pending.take() {
                trace!(generation = slot.generation, "Cancelling superseded execution");
                self.inner.scheduler.cancel(previous);
            }
            slot.generation = slot.generation.wrapping_add(1);
            slot.generation
        };

        let inner = Arc::clone(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.delay.as_duration(),
            Box::new(move || inner.fire(generation, args)),
        );

        let mut slot = self.inner.slot.lock();
        if slot.generation != generation {
            // A newer call armed its own timer while we were scheduling
            self.inner.scheduler.cancel(handle);
        } else if slot.fired != generation {
            slot.pending = Some(handle);
            debug!(generation, "Debounced execution armed (delay: {})", self.inner.delay);
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> DebouncePhase {
        let slot = self.inner.slot.lock();
        if slot.fired == slot.generation {
            DebouncePhase::Idle
        } else {
            DebouncePhase::Pending
        }
    }

    pub fn delay(&self) -> Delay {
        self.inner.delay
    }

    /// Convert into a plain closure, e.g. for callback-taking APIs
    pub fn into_fn(self) -> impl Fn(A) + Clone + Send + Sync + 'static {
        move |args| self.call(args)
    }
}

impl<A, S: Scheduler> Inner<A, S> {
    fn fire(&self, generation: u64, args: A) {
        {
            let mut slot = self.slot.lock();
            if slot.generation != generation {
                trace!(generation, "Skipping stale execution");
                return;
            }
            slot.fired = generation;
            slot.pending = None;
        }

        debug!(generation, "Debounced execution firing");
        (self.action)(args);
    }
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Debounced<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.inner.slot.lock();
        f.debug_struct("Debounced")
            .field("delay", &self.inner.delay)
            .field("generation", &slot.generation)
            .field("pending", &(slot.fired != slot.generation))
            .finish()
    }
}
