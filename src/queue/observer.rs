// SPDX-License-Identifier: MPL-2.0
//! Change notification for the current toast.
//!
//! Two channels are offered:
//!
//! - callbacks registered with [`ToastQueue::observe`](super::ToastQueue::observe),
//!   invoked synchronously each time the current toast changes;
//! - a [`tokio::sync::watch`] channel that also follows progress, for
//!   consumers living on an async runtime.

use super::item::{ToastItem, ToastSnapshot};
use std::fmt;
use tokio::sync::watch;

/// Handle returned by `observe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(Option<&ToastItem>) + Send>;

pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(ObserverId, Callback)>,
    watch_tx: watch::Sender<Option<ToastSnapshot>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        let (watch_tx, _) = watch::channel(None);
        Self {
            next_id: 0,
            callbacks: Vec::new(),
            watch_tx,
        }
    }

    pub(crate) fn add(&mut self, callback: Callback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() < before
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<ToastSnapshot>> {
        self.watch_tx.subscribe()
    }

    /// The current toast was replaced (or removed).
    pub(crate) fn current_changed(&mut self, current: Option<&ToastItem>) {
        for (_, callback) in &mut self.callbacks {
            callback(current);
        }
        self.publish(current);
    }

    /// Progress moved without the current toast changing.
    pub(crate) fn publish(&self, current: Option<&ToastItem>) {
        // send_replace stores the value even when nobody is listening yet.
        self.watch_tx.send_replace(current.map(ToastSnapshot::from));
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("callbacks", &self.len())
            .field("watchers", &self.watch_tx.receiver_count())
            .finish()
    }
}
