// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, DEFAULT_TICK_INTERVAL_MS};
use iced_toast::queue::ToastQueue;
use iced_toast::testing::ManualClock;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_duration_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Short toasts
    let short_config = Config {
        default_duration_ms: Some(200),
        tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        history_capacity: None,
    };
    config::save_to_path(&short_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let mut queue = ToastQueue::new(loaded.queue_config());
    let mut clock = ManualClock::new();
    queue.add("short");
    clock.advance(&mut queue, Duration::from_millis(250));
    assert!(queue.current().is_none());

    // 2. Long toasts
    let long_config = Config {
        default_duration_ms: Some(2_000),
        ..short_config
    };
    config::save_to_path(&long_config, &temp_config_file_path)
        .expect("Failed to write long config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load long config from path");
    let mut queue = ToastQueue::new(loaded.queue_config());
    queue.add("long");
    clock.advance(&mut queue, Duration::from_millis(250));
    assert!(queue.current().is_some());

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_history_capacity_via_config() {
    let config = Config {
        history_capacity: Some(2),
        ..Config::default()
    };
    let mut queue = ToastQueue::new(config.queue_config());

    for i in 0..5 {
        queue.add(format!("toast-{i}"));
    }

    assert_eq!(queue.history().count(), 2);
}
