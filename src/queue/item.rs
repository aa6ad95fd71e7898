// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastItem` struct, its identifier and icon
//! reference, and the `ToastRequest` builder used to enqueue toasts.

use crate::config::QueueConfig;
use crate::domain::ToastDuration;
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Issues the next id. Only the queue hands these out.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque icon reference. The queue carries it, the renderer interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToastIcon {
    Success,
    Info,
    Warning,
    Error,
    /// Application-defined icon name.
    Named(String),
}

/// Parameters for a toast that has not been enqueued yet.
///
/// ```
/// use iced_toast::queue::{ToastIcon, ToastRequest};
/// use std::time::Duration;
///
/// let request = ToastRequest::new("Image saved")
///     .icon(ToastIcon::Success)
///     .duration(Duration::from_secs(5));
/// assert_eq!(request.description(), "Image saved");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    description: String,
    icon: Option<ToastIcon>,
    duration: Option<Duration>,
}

impl ToastRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            icon: None,
            duration: None,
        }
    }

    /// Attaches an icon.
    #[must_use]
    pub fn icon(mut self, icon: ToastIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Overrides the queue's default display duration.
    ///
    /// The value is used as given; a zero duration lasts one tick.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn into_item(self, config: &QueueConfig) -> ToastItem {
        let duration = match self.duration {
            Some(duration) => {
                ToastDuration::exact(duration, config.tick_interval.as_duration())
            }
            None => config.default_duration,
        };
        ToastItem {
            id: ToastId::next(),
            description: self.description,
            icon: self.icon,
            duration,
            elapsed: Duration::ZERO,
        }
    }
}

impl From<&str> for ToastRequest {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for ToastRequest {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

/// A toast owned by a [`ToastQueue`](super::ToastQueue).
///
/// Everything but the elapsed display time is fixed at creation. Elapsed
/// time is kept as a `Duration` so that `n` ticks of `interval` add up to
/// exactly `n * interval`; [`progress`](Self::progress) is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    id: ToastId,
    description: String,
    icon: Option<ToastIcon>,
    duration: ToastDuration,
    elapsed: Duration,
}

impl ToastItem {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> Option<&ToastIcon> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Display time consumed so far, excluding time spent paused.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Display time left before the toast expires.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.as_duration().saturating_sub(self.elapsed)
    }

    /// Elapsed fraction of the display duration, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let total = self.duration.as_duration().as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / total).clamp(0.0, 1.0) as f32
    }

    /// Returns whether the full display duration has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration.as_duration()
    }

    pub(crate) fn advance(&mut self, step: Duration) {
        self.elapsed = self.elapsed.saturating_add(step);
    }

    pub(crate) fn reset_progress(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Read-only copy of the current toast, published to watch receivers.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub description: String,
    pub icon: Option<ToastIcon>,
    pub progress: f32,
}

impl From<&ToastItem> for ToastSnapshot {
    fn from(item: &ToastItem) -> Self {
        Self {
            id: item.id,
            description: item.description.clone(),
            icon: item.icon.clone(),
            progress: item.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TickInterval;
    use approx::assert_abs_diff_eq;

    fn config(ms: u64) -> QueueConfig {
        QueueConfig {
            default_duration: ToastDuration::from_millis(ms),
            tick_interval: TickInterval::from_millis(10),
            ..QueueConfig::default()
        }
    }

    fn item(ms: u64) -> ToastItem {
        ToastRequest::new("test").into_item(&config(ms))
    }

    #[test]
    fn toast_ids_are_unique() {
        let a = item(1_000);
        let b = item(1_000);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_item_starts_at_zero_progress() {
        let toast = item(1_000);
        assert_eq!(toast.progress(), 0.0);
        assert_eq!(toast.remaining(), Duration::from_secs(1));
        assert!(!toast.is_expired());
    }

    #[test]
    fn advance_accumulates_without_drift() {
        let mut toast = item(100);
        for _ in 0..10 {
            toast.advance(Duration::from_millis(10));
        }
        assert!(toast.is_expired());
        assert_eq!(toast.progress(), 1.0);
    }

    #[test]
    fn progress_is_fraction_of_duration() {
        let mut toast = item(2_000);
        toast.advance(Duration::from_millis(500));
        assert_abs_diff_eq!(toast.progress(), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn progress_never_exceeds_one() {
        let mut toast = item(100);
        toast.advance(Duration::from_secs(10));
        assert_eq!(toast.progress(), 1.0);
        assert_eq!(toast.remaining(), Duration::ZERO);
    }

    #[test]
    fn request_duration_overrides_default() {
        let toast = ToastRequest::new("x")
            .duration(Duration::from_millis(750))
            .into_item(&QueueConfig::default());
        assert_eq!(toast.duration().as_millis(), 750);
    }

    #[test]
    fn request_duration_outside_configured_range_is_kept() {
        let short = ToastRequest::new("short")
            .duration(Duration::from_millis(50))
            .into_item(&config(1_000));
        let long = ToastRequest::new("long")
            .duration(Duration::from_secs(120))
            .into_item(&config(1_000));

        assert_eq!(short.duration().as_millis(), 50);
        assert_eq!(long.duration().as_duration(), Duration::from_secs(120));
    }

    #[test]
    fn zero_request_duration_lasts_one_tick() {
        let mut toast = ToastRequest::new("blink")
            .duration(Duration::ZERO)
            .into_item(&config(1_000));
        assert_eq!(toast.duration().as_millis(), 10);
        assert!(!toast.is_expired());

        toast.advance(Duration::from_millis(10));
        assert!(toast.is_expired());
    }

    #[test]
    fn empty_description_is_accepted() {
        let toast = ToastRequest::new("").into_item(&QueueConfig::default());
        assert_eq!(toast.description(), "");
    }

    #[test]
    fn snapshot_copies_visible_fields() {
        let mut toast = ToastRequest::new("saved")
            .icon(ToastIcon::Success)
            .into_item(&config(1_000));
        toast.advance(Duration::from_millis(500));

        let snapshot = ToastSnapshot::from(&toast);
        assert_eq!(snapshot.id, toast.id());
        assert_eq!(snapshot.description, "saved");
        assert_eq!(snapshot.icon, Some(ToastIcon::Success));
        assert_abs_diff_eq!(snapshot.progress, 0.5, epsilon = 1e-6);
    }
}
