// SPDX-License-Identifier: MPL-2.0
//! Deterministic time for driving a [`ToastQueue`] without wall-clock sleeps.
//!
//! [`ManualClock`] stands in for the periodic subscription a real host would
//! run: advancing it by some amount fires one tick per elapsed interval at
//! whatever timer the queue currently owns.
//!
//! ```
//! use iced_toast::queue::ToastQueue;
//! use iced_toast::testing::ManualClock;
//! use std::time::Duration;
//!
//! let mut queue = ToastQueue::default();
//! let mut clock = ManualClock::new();
//! queue.add("hello");
//!
//! clock.advance(&mut queue, Duration::from_secs(4));
//! assert!(queue.current().is_none());
//! ```

use crate::queue::{TickOutcome, ToastQueue};
use std::time::Duration;

/// Default epsilon for progress comparisons.
pub const PROGRESS_EPSILON: f32 = 1e-6;

/// Simulated clock delivering ticks to a queue.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    /// Time advanced but not yet worth a whole tick.
    carry: Duration,
    delivered: usize,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Ticks accepted by the queue so far.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Moves time forward, firing one tick per whole interval.
    ///
    /// Ticks fall on the queue's configured interval. A tick that finds no
    /// active timer (idle or paused queue) is simply not delivered. Returns
    /// the number of ticks the queue accepted.
    pub fn advance(&mut self, queue: &mut ToastQueue, by: Duration) -> usize {
        let interval = queue.config().tick_interval.as_duration();
        self.carry += by;

        let mut accepted = 0;
        while self.carry >= interval {
            self.carry -= interval;
            self.now += interval;
            if let Some(timer) = queue.active_timer() {
                if queue.tick(timer) != TickOutcome::Ignored {
                    accepted += 1;
                }
            }
        }

        self.delivered += accepted;
        accepted
    }

    /// Fires exactly `count` ticks.
    pub fn step(&mut self, queue: &mut ToastQueue, count: u32) -> usize {
        let interval = queue.config().tick_interval.as_duration();
        self.advance(queue, interval * count)
    }
}
