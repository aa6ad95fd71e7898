// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for the toast queue.
//!
//! Elm-style "state down, messages up": [`toast::Toast::view_overlay`] reads
//! the queue, the widget emits [`toast::Message`]s, and [`toast::update`]
//! applies them. [`toast::subscription`] supplies the timer ticks.
//!
//! - [`toast`] - Toast widget, messages and tick subscription
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;

pub use toast::{Message, Toast};
