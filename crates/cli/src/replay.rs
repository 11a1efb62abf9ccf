//! Replay a timed sequence of calls through a limiter
//!
//! Call `i` (1-based) is issued at `start + offsets[i - 1]`. The action records
//! which call produced each execution and when it ran.

use anyhow::Result;
use limiter::{DebouncePhase, Debounced, Throttled};
use pacer_core::Delay;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Debounce,
    Throttle,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Debounce => write!(f, "debounce"),
            Mode::Throttle => write!(f, "throttle"),
        }
    }
}

/// One execution of the wrapped action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// 1-based index of the call whose arguments reached the action
    pub call: usize,
    /// Milliseconds since the replay started
    pub at_ms: u64,
}

/// Outcome of a replay
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub mode: Mode,
    pub delay: Delay,
    pub offsets: Vec<u64>,
    pub executions: Vec<Execution>,
}

impl ReplayReport {
    pub fn executed(&self, call: usize) -> Option<&Execution> {
        self.executions.iter().find(|e| e.call == call)
    }

    /// Indices of calls that produced an execution
    pub fn executed_calls(&self) -> Vec<usize> {
        self.executions.iter().map(|e| e.call).collect()
    }
}

/// Replay `offsets` through a limiter built for `mode`
///
/// Debounce replays wait for the trailing execution before returning.
pub async fn replay(mode: Mode, delay: Delay, offsets: &[u64]) -> Result<ReplayReport> {
    let start = Instant::now();
    let log: Arc<Mutex<Vec<Execution>>> = Default::default();

    let record = {
        let log = Arc::clone(&log);
        move |call: usize| {
            let at_ms = start.elapsed().as_millis() as u64;
            debug!(call, at_ms, "Action executed");
            log.lock().push(Execution { call, at_ms });
        }
    };

    match mode {
        Mode::Throttle => {
            let throttled = Throttled::new(record, delay);
            issue_calls(start, offsets, |call| {
                throttled.call(call);
            })
            .await;
        }
        Mode::Debounce => {
            let debounced: Debounced<usize> = limiter::debounce(record, delay)?;
            issue_calls(start, offsets, |call| debounced.call(call)).await;

            sleep(delay.as_duration()).await;
            while debounced.phase() == DebouncePhase::Pending {
                sleep(Duration::from_millis(1)).await;
            }
        }
    }

    let executions = log.lock().clone();
    Ok(ReplayReport {
        mode,
        delay,
        offsets: offsets.to_vec(),
        executions,
    })
}

async fn issue_calls(start: Instant, offsets: &[u64], mut call: impl FnMut(usize)) {
    for (i, offset) in offsets.iter().enumerate() {
        // Calls sharing an offset are issued back to back without yielding
        let at = start + Duration::from_millis(*offset);
        if at > Instant::now() {
            sleep_until(at).await;
        }
        call(i + 1);
    }
}
