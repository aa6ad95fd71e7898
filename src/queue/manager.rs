// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastQueue` shows one toast at a time, keeps the rest in a FIFO
//! backlog and owns the single timer that drives the visible toast's
//! progress. All operations are total: calling them in a state where they
//! make no sense is a no-op.

use super::history::{DismissReason, EventLog, QueueEvent, QueueEventKind};
use super::item::{ToastId, ToastItem, ToastRequest, ToastSnapshot};
use super::observer::{ObserverId, Observers};
use super::timer::{TickOutcome, Timer, TimerId};
use crate::config::QueueConfig;
use std::collections::VecDeque;
use std::fmt;
use tokio::sync::watch;

/// Observable state of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Nothing to show.
    Idle,
    /// A toast is visible and its timer is running.
    Showing,
    /// A toast is visible and its timer is suspended.
    Paused,
}

/// FIFO queue of toasts with a single visible item.
///
/// Mutating calls take `&mut self`; hosts that share a queue across threads
/// wrap it in a mutex.
///
/// ```
/// use iced_toast::queue::{QueueState, ToastQueue};
///
/// let mut queue = ToastQueue::default();
/// queue.add("Saved");
/// queue.add("Exported");
///
/// assert_eq!(queue.state(), QueueState::Showing);
/// assert_eq!(queue.current().map(|t| t.description()), Some("Saved"));
/// assert_eq!(queue.backlog_len(), 1);
///
/// queue.dismiss();
/// assert_eq!(queue.current().map(|t| t.description()), Some("Exported"));
/// ```
pub struct ToastQueue {
    /// Toast being displayed.
    current: Option<ToastItem>,
    /// Toasts waiting for the current one to leave (oldest first).
    backlog: VecDeque<ToastItem>,
    /// Set while user interaction suspends the timer.
    paused: bool,
    /// Present exactly when a toast is current and not paused.
    timer: Option<Timer>,
    config: QueueConfig,
    observers: Observers,
    history: EventLog,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new(config: QueueConfig) -> Self {
        Self {
            current: None,
            backlog: VecDeque::new(),
            paused: false,
            timer: None,
            config,
            observers: Observers::new(),
            history: EventLog::new(config.history_capacity),
        }
    }

    /// Enqueues a toast with the default duration and no icon.
    pub fn add(&mut self, description: impl Into<String>) -> ToastId {
        self.add_with(ToastRequest::new(description))
    }

    /// Enqueues a toast.
    ///
    /// When nothing is showing the toast becomes current immediately and its
    /// timer starts. Otherwise it waits at the back of the backlog; it never
    /// preempts the current toast, even a paused one.
    pub fn add_with(&mut self, request: impl Into<ToastRequest>) -> ToastId {
        let request: ToastRequest = request.into();
        let item = request.into_item(&self.config);
        let id = item.id();

        if self.current.is_none() {
            self.show(item);
        } else {
            self.backlog.push_back(item);
            let position = self.backlog.len() - 1;
            log::debug!("toast {:?} queued at position {}", id, position);
            self.record(QueueEventKind::Queued { id, position });
        }

        id
    }

    /// Suspends the timer without touching progress.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        let Some(current) = &self.current else {
            return;
        };
        let id = current.id();

        self.paused = true;
        self.timer = None;
        log::debug!("toast {:?} paused at {:.2}", id, current.progress());
        self.record(QueueEventKind::Paused { id });
    }

    /// Restarts the timer from the current progress.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        let Some(current) = &self.current else {
            self.paused = false;
            return;
        };
        let id = current.id();

        self.paused = false;
        self.timer = Some(Timer::start(self.config.tick_interval));
        log::debug!("toast {:?} resumed", id);
        self.record(QueueEventKind::Resumed { id });
    }

    /// Removes the current toast regardless of progress or pause state and
    /// promotes the next one.
    ///
    /// Returns `true` if a toast was dismissed.
    pub fn dismiss(&mut self) -> bool {
        self.dismiss_current(DismissReason::Manual).is_some()
    }

    /// Delivers one timer tick.
    ///
    /// Ticks carrying any id other than [`active_timer`](Self::active_timer)
    /// come from a cancelled timer and are ignored. An accepted tick advances
    /// the current toast by one interval; once the full duration has elapsed
    /// the toast is dismissed exactly as by [`dismiss`](Self::dismiss).
    pub fn tick(&mut self, timer_id: TimerId) -> TickOutcome {
        let Some(timer) = &self.timer else {
            return TickOutcome::Ignored;
        };
        if !timer.matches(timer_id) {
            log::trace!("ignoring stale tick from {:?}", timer_id);
            return TickOutcome::Ignored;
        }
        let step = timer.step();

        let Some(current) = &mut self.current else {
            return TickOutcome::Ignored;
        };
        current.advance(step);

        if current.is_expired() {
            self.dismiss_current(DismissReason::TimedOut);
            TickOutcome::Expired
        } else {
            self.observers.publish(self.current.as_ref());
            TickOutcome::Advanced
        }
    }

    /// Drops the current toast and the whole backlog.
    pub fn clear(&mut self) {
        if !self.has_toasts() {
            return;
        }

        let had_current = self.current.is_some();
        let dropped: Vec<ToastId> = self
            .current
            .take()
            .into_iter()
            .chain(self.backlog.drain(..))
            .map(|item| item.id())
            .collect();

        self.timer = None;
        self.paused = false;
        log::debug!("cleared {} toast(s)", dropped.len());
        for id in dropped {
            self.record(QueueEventKind::Dismissed {
                id,
                reason: DismissReason::Cleared,
            });
        }

        if had_current {
            self.observers.current_changed(None);
        }
    }

    /// Registers a callback invoked every time the current toast changes.
    ///
    /// The callback receives the new current toast, or `None` when the queue
    /// goes idle. Progress updates alone do not trigger it; use
    /// [`watch`](Self::watch) for those.
    pub fn observe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(Option<&ToastItem>) + Send + 'static,
    {
        self.observers.add(Box::new(callback))
    }

    /// Removes a callback. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Returns a receiver following the current toast and its progress.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Option<ToastSnapshot>> {
        self.observers.subscribe()
    }

    /// Returns the toast being displayed.
    #[must_use]
    pub fn current(&self) -> Option<&ToastItem> {
        self.current.as_ref()
    }

    /// Returns the current toast's progress, or `None` when idle.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.current.as_ref().map(ToastItem::progress)
    }

    /// Returns the waiting toasts, oldest first.
    pub fn backlog(&self) -> impl Iterator<Item = &ToastItem> {
        self.backlog.iter()
    }

    #[must_use]
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    #[must_use]
    pub fn state(&self) -> QueueState {
        match (&self.current, self.paused) {
            (None, _) => QueueState::Idle,
            (Some(_), false) => QueueState::Showing,
            (Some(_), true) => QueueState::Paused,
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the id ticks must carry to be accepted, if a timer runs.
    #[must_use]
    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer.as_ref().map(Timer::id)
    }

    /// Returns whether anything is showing or waiting.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.current.is_some() || !self.backlog.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Returns recorded transitions, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &QueueEvent> {
        self.history.iter()
    }

    fn show(&mut self, item: ToastItem) {
        let id = item.id();
        self.paused = false;
        self.timer = Some(Timer::start(self.config.tick_interval));
        self.current = Some(item);

        log::debug!("toast {:?} shown", id);
        self.record(QueueEventKind::Shown { id });
        self.observers.current_changed(self.current.as_ref());
    }

    fn dismiss_current(&mut self, reason: DismissReason) -> Option<ToastItem> {
        let item = self.current.take()?;
        self.timer = None;
        self.paused = false;

        log::debug!("toast {:?} dismissed ({:?})", item.id(), reason);
        self.record(QueueEventKind::Dismissed {
            id: item.id(),
            reason,
        });

        match self.backlog.pop_front() {
            Some(mut next) => {
                next.reset_progress();
                self.show(next);
            }
            None => self.observers.current_changed(None),
        }

        Some(item)
    }

    fn record(&mut self, kind: QueueEventKind) {
        self.history.record(kind);
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("current", &self.current)
            .field("backlog", &self.backlog.len())
            .field("paused", &self.paused)
            .field("timer", &self.active_timer())
            .field("observers", &self.observers)
            .finish()
    }
}
