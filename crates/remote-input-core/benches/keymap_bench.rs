//! Criterion benchmarks for key name and gamepad button translation.
//!
//! Run with:
//! ```bash
//! cargo bench --package remote-input-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use remote_input_core::keymap::xusb::hid_buttons_to_xusb;
use remote_input_core::{GamepadButtons, KeyCodeTable};

// ── Representative key names ──────────────────────────────────────────────────

/// Common keys plus a few names that must miss.
const BENCH_KEY_NAMES: &[&str] = &[
    "KeyA",
    "KeyZ",
    "Enter",
    "Escape",
    "Backspace",
    "Space",
    "F1",
    "F24",
    "ControlLeft",
    "ShiftRight",
    "ArrowUp",
    "Numpad5",
    "Digit0",
    "keya",
    "ZZZZ",
];

fn bench_lookup_single(c: &mut Criterion) {
    let table = KeyCodeTable::shared();
    let mut group = c.benchmark_group("code_table_lookup");
    for name in BENCH_KEY_NAMES {
        group.bench_with_input(BenchmarkId::new("key", name), name, |b, name| {
            b.iter(|| table.lookup(black_box(name)))
        });
    }
    group.finish();
}

fn bench_lookup_all(c: &mut Criterion) {
    let table = KeyCodeTable::shared();
    c.bench_function("code_table_lookup_all", |b| {
        b.iter(|| {
            BENCH_KEY_NAMES
                .iter()
                .map(|name| table.lookup(black_box(name)))
                .fold(0u32, |acc, usage| acc.wrapping_add(u32::from(usage)))
        })
    });
}

fn bench_xusb(c: &mut Criterion) {
    let masks = [0u32, 0b1, 0b0101, GamepadButtons::DEFINED];
    let mut group = c.benchmark_group("hid_buttons_to_xusb");
    for raw in masks {
        let buttons = GamepadButtons::from_wire(raw);
        group.bench_with_input(BenchmarkId::new("mask", raw), &buttons, |b, buttons| {
            b.iter(|| hid_buttons_to_xusb(black_box(*buttons)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lookup_single, bench_lookup_all, bench_xusb);
criterion_main!(benches);
