// SPDX-License-Identifier: MPL-2.0
//! Bounded record of queue transitions.
//!
//! Every state change of a [`ToastQueue`](super::ToastQueue) is appended to a
//! fixed-size log sized by [`HistoryCapacity`].

use super::item::ToastId;
use crate::domain::HistoryCapacity;
use std::collections::VecDeque;
use std::time::Instant;

/// Why a toast left the current slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// `dismiss()` was called.
    Manual,
    /// The display duration ran out.
    TimedOut,
    /// The queue was cleared.
    Cleared,
}

/// Kind of queue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEventKind {
    /// A toast became current.
    Shown { id: ToastId },
    /// A toast was appended to the backlog at the given position.
    Queued { id: ToastId, position: usize },
    Paused { id: ToastId },
    Resumed { id: ToastId },
    /// A toast left the current slot, or the backlog when cleared.
    Dismissed { id: ToastId, reason: DismissReason },
}

/// A timestamped queue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEvent {
    pub at: Instant,
    pub kind: QueueEventKind,
}

impl QueueEvent {
    #[must_use]
    pub fn new(kind: QueueEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}

/// Most recent queue events, oldest first. Full logs drop their oldest entry.
#[derive(Debug, Clone)]
pub(crate) struct EventLog {
    events: VecDeque<QueueEvent>,
    capacity: usize,
}

impl EventLog {
    pub(crate) fn new(capacity: HistoryCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn record(&mut self, kind: QueueEventKind) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(QueueEvent::new(kind));
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &QueueEvent> {
        self.events.iter()
    }
}
