//! Criterion benchmarks for the remote-input datagram codec.
//!
//! Decoding sits on the per-datagram hot path of both injectors, so every
//! event type is measured along with the rejection path for malformed input.
//!
//! Run with:
//! ```bash
//! cargo bench --package remote-input-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use remote_input_core::{
    decode_gamepad, decode_input, encode_event, GamepadButtons, GamepadState, InputEvent,
};

// ── Event fixtures ────────────────────────────────────────────────────────────

fn fixtures() -> Vec<(&'static str, InputEvent)> {
    vec![
        ("MouseMove", InputEvent::MouseMove { dx: 12, dy: -7 }),
        (
            "MouseButtonDown",
            InputEvent::MouseButton {
                button: 0,
                pressed: true,
            },
        ),
        ("MouseWheel", InputEvent::MouseWheel { dy: -120 }),
        (
            "KeyDown",
            InputEvent::Key {
                code: "ShiftLeft".to_string(),
                pressed: true,
            },
        ),
    ]
}

fn make_gamepad() -> InputEvent {
    InputEvent::Gamepad(GamepadState {
        left_x: 16_000,
        left_y: -16_000,
        right_x: 0,
        right_y: 32_767,
        left_trigger: 128,
        right_trigger: 255,
        buttons: GamepadButtons::from_wire(0b0101),
    })
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_decode_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_input");
    for (name, event) in fixtures() {
        let bytes = encode_event(&event).expect("encode must succeed for benchmark setup");
        group.bench_with_input(BenchmarkId::new("event", name), &bytes, |b, bytes| {
            b.iter(|| decode_input(black_box(bytes)).expect("decode must succeed"))
        });
    }
    group.finish();
}

fn bench_decode_gamepad(c: &mut Criterion) {
    let bytes = encode_event(&make_gamepad()).expect("encode must succeed for benchmark setup");
    c.bench_function("decode_gamepad", |b| {
        b.iter(|| decode_gamepad(black_box(&bytes)).expect("decode must succeed"))
    });
}

/// Malformed datagrams must be rejected at least as cheaply as valid ones decode.
fn bench_reject(c: &mut Criterion) {
    let cases: &[(&str, &[u8])] = &[
        ("empty", &[]),
        ("bad_version", &[0x02, 0x01, 0x00, 0x00, 0x00, 0x00]),
        ("unknown_tag", &[0x01, 0x7F]),
        ("truncated_key", &[0x01, 0x04, 0x0A, b'K', b'e']),
    ];

    let mut group = c.benchmark_group("reject");
    for (name, bytes) in cases {
        group.bench_with_input(BenchmarkId::new("datagram", name), bytes, |b, bytes| {
            b.iter(|| decode_input(black_box(bytes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode_input, bench_decode_gamepad, bench_reject);
criterion_main!(benches);
