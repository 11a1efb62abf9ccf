//! Wait-window duration with zero as the fallback

use std::fmt;
use std::time::Duration;

/// Non-negative wait window for a rate limiter
///
/// Missing and negative inputs collapse to [`Delay::ZERO`], so constructing a
/// limiter never fails because of its delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay(Duration);

impl Delay {
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Create from signed milliseconds (negative values become zero)
    pub fn from_millis(ms: i64) -> Self {
        Self(Duration::from_millis(ms.max(0) as u64))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for Delay {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<Option<Duration>> for Delay {
    fn from(duration: Option<Duration>) -> Self {
        Self(duration.unwrap_or_default())
    }
}

impl From<Delay> for Duration {
    fn from(delay: Delay) -> Self {
        delay.0
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0.as_millis())
    }
}
