//! Benchmark harness using Criterion for signal-path measurement.
//!
//! Measures:
//! - Repeat detection of a known vehicle (find hit)
//! - First detection of a new vehicle (alloc + dual insert)
//! - Reading back the alphabetical statistics view

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossroad_monitor::{MonitorConfig, TrafficMonitor, VehicleCategory, CATEGORIES};

use std::time::Duration;

fn populated_monitor(entries: u32) -> TrafficMonitor {
    let config = MonitorConfig::with_period(Duration::from_secs(3600));
    let monitor = TrafficMonitor::new(config).expect("valid config");
    monitor.start();
    for i in 0..entries {
        let category = CATEGORIES[i as usize % CATEGORIES.len()];
        monitor.on_vehicle_signal(category, &format!("ID-{i:04}"));
    }
    monitor
}

/// Benchmark: repeat detection of an already-tracked vehicle
fn bench_repeat_detection(c: &mut Criterion) {
    let monitor = populated_monitor(500);

    c.bench_function("repeat_detection", |b| {
        b.iter(|| {
            monitor.on_vehicle_signal(VehicleCategory::Car, black_box("ID-0250"));
        })
    });
}

/// Benchmark: first detection, including the sorted alphabetical insert
fn bench_first_detection(c: &mut Criterion) {
    c.bench_function("first_detection", |b| {
        let monitor = populated_monitor(500);
        let mut i = 0u32;
        b.iter(|| {
            i += 1;
            monitor.on_vehicle_signal(VehicleCategory::Scooter, &format!("NEW-{i:06}"));
            if monitor.tracked() == monitor.capacity() {
                monitor.reset();
            }
        })
    });
}

/// Benchmark: render the alphabetical statistics view
fn bench_statistics(c: &mut Criterion) {
    let monitor = populated_monitor(1000);

    c.bench_function("statistics_1000", |b| {
        b.iter(|| black_box(monitor.statistics()))
    });
}

criterion_group!(
    benches,
    bench_repeat_detection,
    bench_first_detection,
    bench_statistics
);
criterion_main!(benches);
