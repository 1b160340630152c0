//! Integration tests for the remote-input datagram codec.
//!
//! These exercise the public decode API end to end: raw bytes in, typed
//! events out, plus the key name lookup that follows a key event.

use remote_input_core::{
    decode_gamepad, decode_input, encode_event, parse_input, GamepadButton, GamepadButtons,
    GamepadState, InputEvent, KeyCodeTable, ProtocolError,
};

// ── Worked scenarios ──────────────────────────────────────────────────────────

#[test]
fn test_mouse_move_datagram_decodes_signed_deltas() {
    // Arrange
    let datagram = [1, 1, 0x0A, 0x00, 0xF6, 0xFF];

    // Act
    let event = decode_input(&datagram);

    // Assert
    assert_eq!(event, Some(InputEvent::MouseMove { dx: 10, dy: -10 }));
}

#[test]
fn test_key_down_datagram_resolves_to_usage_0x04() {
    // Arrange
    let datagram = [1, 4, 4, b'K', b'e', b'y', b'A'];

    // Act
    let event = decode_input(&datagram);

    // Assert
    let Some(InputEvent::Key { code, pressed }) = event else {
        panic!("expected a key event, got {event:?}");
    };
    assert!(pressed);
    assert_eq!(code, "KeyA");
    assert_eq!(KeyCodeTable::shared().lookup(&code), 0x04);
}

#[test]
fn test_unmapped_key_name_decodes_but_has_no_usage() {
    let datagram = [1, 4, 4, b'Z', b'Z', b'Z', b'Z'];

    let event = decode_input(&datagram).expect("well-formed key datagram must decode");

    match event {
        InputEvent::Key { code, .. } => assert_eq!(KeyCodeTable::shared().lookup(&code), 0),
        other => panic!("expected a key event, got {other:?}"),
    }
}

#[test]
fn test_gamepad_datagram_with_south_and_west() {
    // Arrange
    let mut datagram = [0u8; 16];
    datagram[0] = 1;
    datagram[1] = 0x10;
    datagram[2..4].copy_from_slice(&100i16.to_le_bytes());
    datagram[12..16].copy_from_slice(&0b101u32.to_le_bytes());

    // Act
    let state = decode_gamepad(&datagram).expect("gamepad datagram must decode");

    // Assert
    assert_eq!((state.left_x, state.left_y, state.right_x, state.right_y), (100, 0, 0, 0));
    assert_eq!((state.left_trigger, state.right_trigger), (0, 0));
    let pressed: Vec<_> = state.buttons.pressed().collect();
    assert_eq!(pressed, vec![GamepadButton::South, GamepadButton::West]);
}

#[test]
fn test_gamepad_datagram_of_exact_layout_length_decodes() {
    // Arrange: header, four sticks, two triggers, mask; nothing else.
    let mut datagram = vec![1, 0x10];
    for axis in [100i16, -1, 0, i16::MIN] {
        datagram.extend_from_slice(&axis.to_le_bytes());
    }
    datagram.extend_from_slice(&[7, 200]);
    datagram.extend_from_slice(&0b101u32.to_le_bytes());
    assert_eq!(datagram.len(), 16);

    // Act
    let state = decode_gamepad(&datagram).expect("16-byte report must decode");
    let short = decode_gamepad(&datagram[..15]);

    // Assert
    assert_eq!((state.left_x, state.left_y, state.right_x, state.right_y), (100, -1, 0, i16::MIN));
    assert_eq!((state.left_trigger, state.right_trigger), (7, 200));
    assert!(state.buttons.is_pressed(GamepadButton::South));
    assert!(state.buttons.is_pressed(GamepadButton::West));
    assert_eq!(short, None);
}

// ── Fail-closed decoding ──────────────────────────────────────────────────────

#[test]
fn test_buffers_shorter_than_envelope_are_rejected() {
    for datagram in [&[][..], &[1][..]] {
        assert_eq!(decode_input(datagram), None);
        assert_eq!(decode_gamepad(datagram), None);
    }
}

#[test]
fn test_wrong_version_is_rejected_on_both_channels() {
    let move_datagram = [2, 1, 0x0A, 0x00, 0xF6, 0xFF];
    let mut pad_datagram = [0u8; 16];
    pad_datagram[0] = 0;
    pad_datagram[1] = 0x10;

    assert_eq!(
        parse_input(&move_datagram),
        Err(ProtocolError::UnsupportedVersion(2))
    );
    assert_eq!(decode_gamepad(&pad_datagram), None);
}

#[test]
fn test_every_tag_one_byte_short_is_rejected() {
    let full: &[&[u8]] = &[
        &[1, 1, 0, 0, 0, 0],
        &[1, 2, 0],
        &[1, 3, 0],
        &[1, 4, 1, b'A'],
        &[1, 5, 1, b'A'],
        &[1, 6, 0, 0],
    ];
    for datagram in full {
        assert!(decode_input(datagram).is_some(), "{datagram:?} must decode");
        let short = &datagram[..datagram.len() - 1];
        assert_eq!(decode_input(short), None, "{short:?} must be rejected");
    }
}

#[test]
fn test_truncated_key_name_is_rejected() {
    // Declares 10 bytes, carries 2.
    let datagram = [1, 4, 10, b'K', b'e'];

    assert_eq!(
        parse_input(&datagram),
        Err(ProtocolError::KeyNameTruncated {
            declared: 10,
            available: 2
        })
    );
}

#[test]
fn test_gamepad_tag_on_hid_channel_is_rejected() {
    let mut datagram = [0u8; 16];
    datagram[0] = 1;
    datagram[1] = 0x10;

    assert_eq!(decode_input(&datagram), None);
    assert_eq!(decode_gamepad(&datagram), Some(GamepadState::neutral()));
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let datagram = [1, 6, 0x88, 0xFF, 0xDE, 0xAD, 0xBE, 0xEF];
    assert_eq!(decode_input(&datagram), Some(InputEvent::MouseWheel { dy: -120 }));
}

// ── Encode / decode agreement ─────────────────────────────────────────────────

#[test]
fn test_mouse_move_roundtrip_over_sampled_values() {
    let samples = [i16::MIN, -32_767, -1_000, -1, 0, 1, 1_000, 32_766, i16::MAX];
    for dx in samples {
        for dy in samples {
            let event = InputEvent::MouseMove { dx, dy };
            let bytes = encode_event(&event).expect("mouse move always encodes");
            assert_eq!(decode_input(&bytes), Some(event));
        }
    }
}

#[test]
fn test_gamepad_roundtrip_over_sampled_states() {
    let axes = [i16::MIN, -1, 0, 1, i16::MAX];
    let triggers = [0u8, 1, 128, 255];
    let masks = [0u32, 0b101, 0x3FFF, 0xFFFF_FFFF];
    for axis in axes {
        for trigger in triggers {
            for mask in masks {
                let state = GamepadState {
                    left_x: axis,
                    left_y: axis.wrapping_neg(),
                    right_x: axis / 2,
                    right_y: 0,
                    left_trigger: trigger,
                    right_trigger: 255 - trigger,
                    buttons: GamepadButtons::from_wire(mask),
                };
                let bytes = encode_event(&InputEvent::Gamepad(state)).expect("gamepad always encodes");
                assert_eq!(decode_gamepad(&bytes), Some(state), "{state:?}");
            }
        }
    }
}

#[test]
fn test_encode_rejects_overlong_key_name() {
    let event = InputEvent::Key {
        code: "K".repeat(256),
        pressed: false,
    };
    assert_eq!(encode_event(&event), Err(ProtocolError::KeyNameTooLong(256)));
}
