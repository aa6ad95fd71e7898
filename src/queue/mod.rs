// SPDX-License-Identifier: MPL-2.0
//! Toast queue: ordering and timing of transient notifications.
//!
//! Toasts appear one at a time. The visible toast carries a progress value
//! driven by a timer; when it reaches 1.0 the toast leaves and the next one
//! in line takes its place.
//!
//! # Components
//!
//! - [`item`] - `ToastItem`, `ToastId`, `ToastIcon` and the `ToastRequest` builder
//! - [`manager`] - `ToastQueue`, the state machine
//! - [`timer`] - `TimerId` and tick outcomes
//! - [`observer`] - change callbacks and the watch channel
//! - [`history`] - bounded event record
//!
//! # Usage
//!
//! ```
//! use iced_toast::queue::ToastQueue;
//!
//! let mut queue = ToastQueue::default();
//! queue.add("Image saved");
//!
//! // Host loop: deliver ticks for the active timer.
//! while let Some(timer) = queue.active_timer() {
//!     queue.tick(timer);
//! }
//! assert!(queue.current().is_none());
//! ```
//!
//! # Design Considerations
//!
//! - Default duration: 3 s; default tick interval: 16 ms (both configurable)
//! - Exactly one toast visible; later toasts wait in FIFO order
//! - Backlog entries cannot be removed individually

mod history;
mod item;
mod manager;
mod observer;
mod timer;

pub use history::{DismissReason, QueueEvent, QueueEventKind};
pub use item::{ToastIcon, ToastId, ToastItem, ToastRequest, ToastSnapshot};
pub use manager::{QueueState, ToastQueue};
pub use observer::ObserverId;
pub use timer::{TickOutcome, TimerId};
