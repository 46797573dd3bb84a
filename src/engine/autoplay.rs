//! Autoplay timer owned by a single carousel instance.
//!
//! The timer is driven by the host: every time the host reports elapsed time
//! the timer accumulates it and reports how many whole intervals completed.
//! Dropping the timer is cancellation; arming a new one always starts from a
//! full interval.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Observable autoplay state of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayState {
    /// A timer is armed and advances the carousel every interval.
    Running,
    /// The pointer is over the carousel; no timer is alive.
    Paused,
    /// Autoplay is turned off in configuration.
    Disabled,
    /// The instance was torn down. Terminal.
    Stopped,
}

impl fmt::Display for AutoplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AutoplayState::Running => "running",
            AutoplayState::Paused => "paused",
            AutoplayState::Disabled => "disabled",
            AutoplayState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// A recurring fixed-interval countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    /// Arm a fresh timer. Returns `None` for a zero interval, which would
    /// fire unboundedly.
    pub fn arm(interval: Duration) -> Option<Self> {
        if interval.is_zero() {
            return None;
        }
        Some(Self {
            interval,
            elapsed: Duration::ZERO,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next fire.
    pub fn remaining(&self) -> Duration {
        self.interval - self.elapsed
    }

    /// Accumulate `dt` and return how many intervals completed.
    ///
    /// The partial remainder carries over to the next call.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        let total = self.elapsed.as_nanos() + dt.as_nanos();
        let interval = self.interval.as_nanos();
        let fires = total / interval;
        self.elapsed = duration_from_nanos(total % interval);
        u64::try_from(fires).unwrap_or(u64::MAX)
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
