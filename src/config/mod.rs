// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast queue configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow toasts down
//! config.default_duration_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.default_duration_ms, Some(5_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::{HistoryCapacity, TickInterval, ToastDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Persisted settings. Every field is optional so partial files stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    #[serde(default)]
    pub history_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

impl Config {
    /// Resolves the persisted values into validated queue settings.
    ///
    /// Missing values fall back to defaults; out-of-range values are clamped.
    #[must_use]
    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig {
            default_duration: ToastDuration::from_millis(
                self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            ),
            tick_interval: TickInterval::from_millis(
                self.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            ),
            history_capacity: HistoryCapacity::new(
                self.history_capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY),
            ),
        }
    }
}

/// Validated runtime settings for a [`ToastQueue`](crate::queue::ToastQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    /// Display duration used when a toast does not request its own.
    pub default_duration: ToastDuration,
    /// Period of the timer driving progress.
    pub tick_interval: TickInterval,
    /// Number of events kept in the queue history.
    pub history_capacity: HistoryCapacity,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
