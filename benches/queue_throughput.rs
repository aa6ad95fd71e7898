// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast queue operations.
//!
//! Measures the performance of:
//! - Enqueueing into a busy queue
//! - Draining a backlog through timeouts
//! - Tick delivery with observers attached

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::config::QueueConfig;
use iced_toast::domain::{TickInterval, ToastDuration};
use iced_toast::queue::ToastQueue;
use iced_toast::testing::ManualClock;
use std::hint::black_box;
use std::time::Duration;

fn fast_queue() -> ToastQueue {
    ToastQueue::new(QueueConfig {
        default_duration: ToastDuration::from_millis(100),
        tick_interval: TickInterval::from_millis(10),
        ..QueueConfig::default()
    })
}

/// Benchmark appending to the backlog.
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    group.bench_function("add_1000", |b| {
        b.iter(|| {
            let mut queue = fast_queue();
            for i in 0..1000 {
                queue.add(format!("toast-{i}"));
            }
            black_box(&queue);
        });
    });

    group.finish();
}

/// Benchmark timing out a full backlog.
///
/// Every toast takes ten ticks, so this delivers 1000 ticks per iteration.
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    group.bench_function("drain_100_by_timeout", |b| {
        b.iter(|| {
            let mut queue = fast_queue();
            let mut clock = ManualClock::new();
            for i in 0..100 {
                queue.add(format!("toast-{i}"));
            }
            clock.advance(&mut queue, Duration::from_secs(10));
            black_box(queue.has_toasts());
        });
    });

    group.bench_function("drain_100_with_observer", |b| {
        b.iter(|| {
            let mut queue = fast_queue();
            let mut clock = ManualClock::new();
            let _rx = queue.watch();
            queue.observe(|current| {
                black_box(current);
            });
            for i in 0..100 {
                queue.add(format!("toast-{i}"));
            }
            clock.advance(&mut queue, Duration::from_secs(10));
            black_box(queue.has_toasts());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_drain);
criterion_main!(benches);
