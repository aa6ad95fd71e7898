// SPDX-License-Identifier: MPL-2.0
//! Timer handle owned by the queue.
//!
//! The queue does not spawn threads or futures. Starting a timer means
//! issuing a fresh [`TimerId`]; the host delivers ticks tagged with that id
//! (an Iced subscription, a game loop, [`ManualClock`](crate::testing::ManualClock)
//! in tests). Dropping the handle cancels the timer: later ticks carrying
//! the old id no longer match and are ignored.

use crate::domain::TickInterval;
use std::time::Duration;

/// Identity of one started timer. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A running repeating timer.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Timer {
    id: TimerId,
    interval: TickInterval,
}

impl Timer {
    pub(crate) fn start(interval: TickInterval) -> Self {
        let timer = Self {
            id: TimerId::next(),
            interval,
        };
        log::trace!("timer {:?} started ({} ms)", timer.id, interval.as_millis());
        timer
    }

    pub(crate) fn id(&self) -> TimerId {
        self.id
    }

    pub(crate) fn step(&self) -> Duration {
        self.interval.as_duration()
    }

    pub(crate) fn matches(&self, id: TimerId) -> bool {
        self.id == id
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::trace!("timer {:?} stopped", self.id);
    }
}

/// Result of delivering a tick to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick did not belong to the active timer (stale, paused or idle).
    Ignored,
    /// The current toast advanced by one interval.
    Advanced,
    /// The current toast reached its full duration and was dismissed.
    Expired,
}
