// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a timed toast notification queue with an Iced renderer.
//!
//! The [`queue`] module holds the framework-independent state machine:
//! one visible toast, a FIFO backlog, and a timer-driven progress value
//! with pause, resume and dismiss. The [`ui`] module renders it with Iced,
//! and [`config`] persists its timing settings.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod queue;
pub mod testing;
pub mod ui;
