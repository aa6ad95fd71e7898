// SPDX-License-Identifier: MPL-2.0
//! Timing newtypes.
//!
//! Type-safe wrappers for the durations the toast queue works with,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Display duration bounds in milliseconds (100 ms to 60 s).
pub mod duration_bounds {
    /// Minimum display duration.
    pub const MIN_MS: u64 = 100;
    /// Maximum display duration.
    pub const MAX_MS: u64 = 60_000;
    /// Default display duration.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// Tick interval bounds in milliseconds (10 ms to 100 ms).
pub mod tick_bounds {
    /// Minimum tick interval.
    pub const MIN_MS: u64 = 10;
    /// Maximum tick interval.
    pub const MAX_MS: u64 = 100;
    /// Default tick interval, roughly one frame at 60 Hz.
    pub const DEFAULT_MS: u64 = 16;
}

/// Event history capacity bounds.
pub mod history_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 1;
    /// Maximum number of retained events.
    pub const MAX: usize = 1024;
    /// Default number of retained events.
    pub const DEFAULT: usize = 64;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast stays on screen once it becomes current.
///
/// Configured defaults go through [`new`](Self::new) and are clamped to
/// 100 ms – 60 s; a per-toast override is kept as given via
/// [`exact`](Self::exact). Time spent paused does not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastDuration(Duration);

impl ToastDuration {
    /// Creates a display duration, clamping to the valid range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.clamp(
            Duration::from_millis(duration_bounds::MIN_MS),
            Duration::from_millis(duration_bounds::MAX_MS),
        ))
    }

    /// Creates a display duration from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Keeps `duration` unchanged, raised only to at least `floor`.
    #[must_use]
    pub fn exact(duration: Duration, floor: Duration) -> Self {
        Self(duration.max(floor))
    }

    /// Returns the duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the duration in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(Duration::from_millis(duration_bounds::DEFAULT_MS))
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Period between two timer ticks.
///
/// Each accepted tick advances the current toast by exactly one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickInterval(Duration);

impl TickInterval {
    /// Creates a tick interval, clamping to the valid range.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self(interval.clamp(
            Duration::from_millis(tick_bounds::MIN_MS),
            Duration::from_millis(tick_bounds::MAX_MS),
        ))
    }

    /// Creates a tick interval from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Returns the interval.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the interval in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(Duration::from_millis(tick_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of queue events retained for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_bounds::MIN, history_bounds::MAX))
    }

    /// Returns the raw capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_bounds::DEFAULT)
    }
}
