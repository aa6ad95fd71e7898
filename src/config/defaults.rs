// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. The values mirror the bounds declared in
//! [`crate::domain::timing`].

use crate::domain::timing::{duration_bounds, history_bounds, tick_bounds};

// ==========================================================================
// Display Duration Defaults
// ==========================================================================

/// Default time a toast stays visible (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Minimum display duration (in milliseconds).
pub const MIN_DURATION_MS: u64 = duration_bounds::MIN_MS;

/// Maximum display duration (in milliseconds).
pub const MAX_DURATION_MS: u64 = duration_bounds::MAX_MS;

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Default period between progress ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = tick_bounds::MIN_MS;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = tick_bounds::MAX_MS;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of queue events kept in the history buffer.
pub const DEFAULT_HISTORY_CAPACITY: usize = history_bounds::DEFAULT;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = history_bounds::MIN;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = history_bounds::MAX;
