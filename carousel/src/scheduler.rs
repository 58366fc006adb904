//! Autoplay scheduler: decides when the next autoplay advance is due.
//!
//! The scheduler never touches a clock itself. Callers pass `now` in
//! milliseconds from any monotonic origin (tokio `Instant`, `Date.now()`),
//! which keeps the state machine deterministic under test.

use std::time::Duration;

use serde::Serialize;

/// Default autoplay cadence.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Scheduler state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AutoplayState {
    /// Ticking; the next tick fires at `next_due` ms
    Running { next_due: u64 },
    /// Hovered; no ticks until resumed
    Paused,
    /// Torn down; never fires again
    Stopped,
}

/// Fixed-cadence autoplay timer with pause/resume.
#[derive(Clone, Debug)]
pub struct AutoplayScheduler {
    interval_ms: u64,
    state: AutoplayState,
}

impl AutoplayScheduler {
    /// A running scheduler whose first tick is one interval after `now`.
    pub fn new(interval: Duration, now: u64) -> Self {
        let interval_ms = (interval.as_millis() as u64).max(1);
        Self {
            interval_ms,
            state: AutoplayState::Running {
                next_due: now.saturating_add(interval_ms),
            },
        }
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// RUNNING -> PAUSED. Returns true if the state changed.
    pub fn pause(&mut self) -> bool {
        match self.state {
            AutoplayState::Running { .. } => {
                self.state = AutoplayState::Paused;
                true
            }
            AutoplayState::Paused | AutoplayState::Stopped => false,
        }
    }

    /// PAUSED -> RUNNING with a full fresh interval. Returns true if the state changed.
    pub fn resume(&mut self, now: u64) -> bool {
        match self.state {
            AutoplayState::Paused => {
                self.state = AutoplayState::Running {
                    next_due: now.saturating_add(self.interval_ms),
                };
                true
            }
            AutoplayState::Running { .. } | AutoplayState::Stopped => false,
        }
    }

    /// Returns true at most once per interval when a tick is due.
    ///
    /// Missed intervals are not replayed: the next tick is scheduled one
    /// interval after `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.state {
            AutoplayState::Running { next_due } if now >= next_due => {
                self.state = AutoplayState::Running {
                    next_due: now.saturating_add(self.interval_ms),
                };
                true
            }
            _ => false,
        }
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<u64> {
        match self.state {
            AutoplayState::Running { next_due } => Some(next_due),
            AutoplayState::Paused | AutoplayState::Stopped => None,
        }
    }

    /// Cancel for good.
    pub fn stop(&mut self) {
        self.state = AutoplayState::Stopped;
    }
}
