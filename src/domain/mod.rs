// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`timing`]: Timing types ([`ToastDuration`](timing::ToastDuration),
//!   [`TickInterval`](timing::TickInterval), [`HistoryCapacity`](timing::HistoryCapacity))

pub mod timing;

pub use timing::{HistoryCapacity, TickInterval, ToastDuration};
