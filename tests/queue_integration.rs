// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the toast queue driven by simulated time.

use approx::assert_abs_diff_eq;
use iced_toast::config::QueueConfig;
use iced_toast::domain::{TickInterval, ToastDuration};
use iced_toast::queue::{
    DismissReason, QueueEventKind, QueueState, ToastItem, ToastQueue, ToastRequest,
};
use iced_toast::testing::{ManualClock, PROGRESS_EPSILON};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn queue_with(duration_ms: u64) -> ToastQueue {
    ToastQueue::new(QueueConfig {
        default_duration: ToastDuration::from_millis(duration_ms),
        tick_interval: TickInterval::from_millis(10),
        ..QueueConfig::default()
    })
}

fn record_transitions(queue: &mut ToastQueue) -> Arc<Mutex<Vec<Option<String>>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    queue.observe(move |current| {
        sink.lock()
            .unwrap()
            .push(current.map(|t| t.description().to_string()));
    });
    seen
}

#[test]
fn toasts_are_shown_in_fifo_order() {
    let mut queue = queue_with(100);
    let mut clock = ManualClock::new();
    let seen = record_transitions(&mut queue);

    queue.add("a");
    queue.add("b");
    queue.add("c");
    clock.advance(&mut queue, Duration::from_millis(100));
    queue.dismiss();
    clock.advance(&mut queue, Duration::from_millis(100));

    let expected: Vec<Option<String>> = vec![
        Some("a".into()),
        Some("b".into()),
        Some("c".into()),
        None,
    ];
    assert_eq!(*seen.lock().unwrap(), expected);
}

#[test]
fn paused_progress_stays_frozen() {
    let mut queue = queue_with(1_000);
    let mut clock = ManualClock::new();
    queue.add("hold");
    clock.advance(&mut queue, Duration::from_millis(300));
    let frozen = queue.progress().expect("toast showing");

    queue.pause();
    clock.advance(&mut queue, Duration::from_secs(60));
    assert_eq!(queue.progress(), Some(frozen));
    assert_eq!(queue.state(), QueueState::Paused);

    queue.resume();
    clock.advance(&mut queue, Duration::from_millis(200));
    assert_abs_diff_eq!(queue.progress().unwrap(), 0.5, epsilon = PROGRESS_EPSILON);
}

#[test]
fn timeout_clears_queue_exactly_once() {
    let mut queue = queue_with(100);
    let mut clock = ManualClock::new();
    let seen = record_transitions(&mut queue);

    queue.add("hello");
    clock.advance(&mut queue, Duration::from_millis(100));

    assert_eq!(queue.state(), QueueState::Idle);
    assert!(queue.active_timer().is_none());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some("hello".to_string()), None]
    );

    let timeouts = queue
        .history()
        .filter(|e| {
            matches!(
                e.kind,
                QueueEventKind::Dismissed {
                    reason: DismissReason::TimedOut,
                    ..
                }
            )
        })
        .count();
    assert_eq!(timeouts, 1);
}

#[test]
fn idle_queue_receives_no_further_updates() {
    let mut queue = queue_with(100);
    let mut clock = ManualClock::new();
    let mut rx = queue.watch();

    queue.add("short");
    assert_eq!(clock.advance(&mut queue, Duration::from_millis(100)), 10);
    assert!(rx.borrow_and_update().is_none());

    let events = queue.history().count();
    assert_eq!(clock.advance(&mut queue, Duration::from_secs(5)), 0);
    assert_eq!(queue.history().count(), events);
    assert!(!rx.has_changed().unwrap_or(true));
}

#[test]
fn concrete_scenario_from_add_to_dismiss() {
    let mut queue = queue_with(1_000);
    let mut clock = ManualClock::new();

    queue.add("A");
    let current = queue.current().expect("A showing");
    assert_eq!(current.description(), "A");
    assert_eq!(current.progress(), 0.0);

    clock.advance(&mut queue, Duration::from_millis(500));
    assert_abs_diff_eq!(queue.progress().unwrap(), 0.5, epsilon = PROGRESS_EPSILON);

    queue.add("B");
    assert_eq!(
        queue.backlog().map(ToastItem::description).collect::<Vec<_>>(),
        vec!["B"]
    );
    assert_eq!(queue.current().map(ToastItem::description), Some("A"));

    queue.dismiss();
    let current = queue.current().expect("B showing");
    assert_eq!(current.description(), "B");
    assert_eq!(current.progress(), 0.0);
    assert_eq!(queue.backlog_len(), 0);
}

#[test]
fn per_toast_duration_is_honoured() {
    let mut queue = queue_with(1_000);
    let mut clock = ManualClock::new();

    queue.add_with(ToastRequest::new("quick").duration(Duration::from_millis(200)));
    queue.add("regular");

    clock.advance(&mut queue, Duration::from_millis(200));
    assert_eq!(queue.current().map(ToastItem::description), Some("regular"));

    clock.advance(&mut queue, Duration::from_millis(999));
    assert_eq!(queue.current().map(ToastItem::description), Some("regular"));
    clock.advance(&mut queue, Duration::from_millis(1));
    assert!(queue.current().is_none());
}

#[test]
fn short_request_duration_is_not_stretched() {
    let mut queue = queue_with(1_000);
    let mut clock = ManualClock::new();

    queue.add_with(ToastRequest::new("fast").duration(Duration::from_millis(50)));
    assert_eq!(queue.current().map(|t| t.duration().as_millis()), Some(50));

    clock.advance(&mut queue, Duration::from_millis(40));
    assert_eq!(queue.current().map(ToastItem::description), Some("fast"));
    clock.advance(&mut queue, Duration::from_millis(10));
    assert!(queue.current().is_none());
}

#[test]
fn long_request_duration_is_not_cut_short() {
    let mut queue = ToastQueue::new(QueueConfig {
        tick_interval: TickInterval::from_millis(100),
        ..QueueConfig::default()
    });
    let mut clock = ManualClock::new();

    queue.add_with(ToastRequest::new("slow").duration(Duration::from_secs(120)));

    clock.advance(&mut queue, Duration::from_secs(61));
    assert_eq!(queue.current().map(ToastItem::description), Some("slow"));
    clock.advance(&mut queue, Duration::from_millis(58_900));
    assert_eq!(queue.current().map(ToastItem::description), Some("slow"));
    clock.advance(&mut queue, Duration::from_millis(100));
    assert!(queue.current().is_none());
}

#[tokio::test]
async fn watch_receiver_wakes_on_current_change() {
    let mut queue = queue_with(100);
    let mut rx = queue.watch();

    queue.add("async");
    rx.changed().await.expect("sender alive");
    let snapshot = rx.borrow_and_update().clone().expect("toast published");
    assert_eq!(snapshot.description, "async");

    queue.dismiss();
    rx.changed().await.expect("sender alive");
    assert!(rx.borrow_and_update().is_none());
}
