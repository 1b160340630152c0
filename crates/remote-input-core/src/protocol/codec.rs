//! Datagram codec for the remote-input protocol.
//!
//! Wire format:
//! ```text
//! [version:1][tag:1][payload:N]
//! ```
//! All multi-byte integers are little-endian.  Deltas and stick axes are
//! signed 16-bit; button indices and triggers are unsigned 8-bit.
//!
//! | tag  | event             | min len | payload                               |
//! |------|-------------------|---------|---------------------------------------|
//! | 0x01 | mouse move        | 6       | `dx:i16` `dy:i16`                     |
//! | 0x02 | mouse button down | 3       | `button:u8`                           |
//! | 0x03 | mouse button up   | 3       | `button:u8`                           |
//! | 0x04 | key down          | 3 + n   | `n:u8` then `n` bytes of key name     |
//! | 0x05 | key up            | 3 + n   | same as key down                      |
//! | 0x06 | mouse wheel       | 4       | `dy:i16`                              |
//! | 0x10 | gamepad state     | 16      | 4×`i16` sticks, 2×`u8` triggers, `u32` buttons |
//!
//! Decoding fails closed: a datagram that is too short, carries the wrong
//! version, an unknown tag, or a key name running past the end is dropped.
//! The `parse_*` functions report why with a [`ProtocolError`]; the
//! `decode_*` functions are the plain "event or nothing" form.

use crate::domain::gamepad::{GamepadButtons, GamepadState};
use crate::protocol::messages::{EventTag, InputEvent, ENVELOPE_SIZE, PROTOCOL_VERSION};
use thiserror::Error;

/// Reasons a datagram was dropped, or an event could not be encoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The datagram is shorter than the envelope or the tag's fixed payload.
    #[error("datagram too short: need at least {needed} bytes, got {available}")]
    TooShort { needed: usize, available: usize },

    /// The version byte is not [`PROTOCOL_VERSION`].
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    /// The tag byte is unknown, or belongs to the other channel.
    #[error("unknown event tag: 0x{0:02X}")]
    UnknownTag(u8),

    /// The key name length prefix runs past the end of the datagram.
    #[error("key name truncated: prefix declares {declared} bytes, {available} available")]
    KeyNameTruncated { declared: usize, available: usize },

    /// A key name longer than the one-byte length prefix can describe.
    #[error("key name too long to encode: {0} bytes (max 255)")]
    KeyNameTooLong(usize),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses a keyboard/mouse channel datagram.
///
/// Gamepad datagrams (tag 0x10) are not accepted on this channel and report
/// [`ProtocolError::UnknownTag`].
///
/// # Errors
///
/// Returns [`ProtocolError`] describing why the datagram must be dropped.
///
/// # Examples
///
/// ```rust
/// use remote_input_core::{parse_input, InputEvent};
///
/// let event = parse_input(&[1, 1, 0x0A, 0x00, 0xF6, 0xFF]).unwrap();
/// assert_eq!(event, InputEvent::MouseMove { dx: 10, dy: -10 });
/// ```
pub fn parse_input(bytes: &[u8]) -> Result<InputEvent, ProtocolError> {
    let raw = read_envelope(bytes)?;

    match EventTag::try_from(raw) {
        Ok(tag @ EventTag::MouseMove) => {
            require_len(bytes, tag.min_len())?;
            Ok(InputEvent::MouseMove {
                dx: read_i16(bytes, 2),
                dy: read_i16(bytes, 4),
            })
        }
        Ok(tag @ (EventTag::MouseButtonDown | EventTag::MouseButtonUp)) => {
            require_len(bytes, tag.min_len())?;
            Ok(InputEvent::MouseButton {
                button: bytes[2],
                pressed: tag == EventTag::MouseButtonDown,
            })
        }
        Ok(tag @ (EventTag::KeyDown | EventTag::KeyUp)) => {
            require_len(bytes, tag.min_len())?;
            Ok(InputEvent::Key {
                code: read_key_name(bytes)?,
                pressed: tag == EventTag::KeyDown,
            })
        }
        Ok(tag @ EventTag::MouseWheel) => {
            require_len(bytes, tag.min_len())?;
            Ok(InputEvent::MouseWheel {
                dy: read_i16(bytes, 2),
            })
        }
        // Gamepad reports belong to the other channel.
        Ok(EventTag::GamepadState) | Err(()) => Err(ProtocolError::UnknownTag(raw)),
    }
}

/// Parses a gamepad channel datagram into a full [`GamepadState`].
///
/// # Errors
///
/// Returns [`ProtocolError`] describing why the datagram must be dropped.
pub fn parse_gamepad(bytes: &[u8]) -> Result<GamepadState, ProtocolError> {
    let tag = read_envelope(bytes)?;
    if tag != EventTag::GamepadState as u8 {
        return Err(ProtocolError::UnknownTag(tag));
    }
    require_len(bytes, EventTag::GamepadState.min_len())?;

    Ok(GamepadState {
        left_x: read_i16(bytes, 2),
        left_y: read_i16(bytes, 4),
        right_x: read_i16(bytes, 6),
        right_y: read_i16(bytes, 8),
        left_trigger: bytes[10],
        right_trigger: bytes[11],
        buttons: GamepadButtons::from_wire(read_u32(bytes, 12)),
    })
}

/// Decodes a keyboard/mouse datagram, or returns `None` if it must be dropped.
pub fn decode_input(bytes: &[u8]) -> Option<InputEvent> {
    parse_input(bytes).ok()
}

/// Decodes a gamepad datagram, or returns `None` if it must be dropped.
pub fn decode_gamepad(bytes: &[u8]) -> Option<GamepadState> {
    parse_gamepad(bytes).ok()
}

/// Encodes an [`InputEvent`] into a complete datagram.
///
/// # Errors
///
/// Returns [`ProtocolError::KeyNameTooLong`] if a key name exceeds 255 bytes.
///
/// # Examples
///
/// ```rust
/// use remote_input_core::{encode_event, InputEvent};
///
/// let bytes = encode_event(&InputEvent::MouseWheel { dy: -120 }).unwrap();
/// assert_eq!(bytes, vec![1, 6, 0x88, 0xFF]);
/// ```
pub fn encode_event(event: &InputEvent) -> Result<Vec<u8>, ProtocolError> {
    let tag = event.tag();
    let mut buf = Vec::with_capacity(tag.min_len());
    buf.push(PROTOCOL_VERSION);
    buf.push(tag as u8);

    match event {
        InputEvent::MouseMove { dx, dy } => {
            buf.extend_from_slice(&dx.to_le_bytes());
            buf.extend_from_slice(&dy.to_le_bytes());
        }
        InputEvent::MouseButton { button, .. } => buf.push(*button),
        InputEvent::MouseWheel { dy } => buf.extend_from_slice(&dy.to_le_bytes()),
        InputEvent::Key { code, .. } => {
            let name = code.as_bytes();
            let len = u8::try_from(name.len())
                .map_err(|_| ProtocolError::KeyNameTooLong(name.len()))?;
            buf.push(len);
            buf.extend_from_slice(name);
        }
        InputEvent::Gamepad(state) => encode_gamepad(&mut buf, state),
    }
    Ok(buf)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn encode_gamepad(buf: &mut Vec<u8>, s: &GamepadState) {
    buf.extend_from_slice(&s.left_x.to_le_bytes());
    buf.extend_from_slice(&s.left_y.to_le_bytes());
    buf.extend_from_slice(&s.right_x.to_le_bytes());
    buf.extend_from_slice(&s.right_y.to_le_bytes());
    buf.push(s.left_trigger);
    buf.push(s.right_trigger);
    buf.extend_from_slice(&s.buttons.bits().to_le_bytes());
}

/// Validates `[version][tag]` and returns the raw tag byte.
fn read_envelope(bytes: &[u8]) -> Result<u8, ProtocolError> {
    require_len(bytes, ENVELOPE_SIZE)?;
    if bytes[0] != PROTOCOL_VERSION {
        return Err(ProtocolError::UnsupportedVersion(bytes[0]));
    }
    Ok(bytes[1])
}

fn require_len(bytes: &[u8], needed: usize) -> Result<(), ProtocolError> {
    if bytes.len() < needed {
        Err(ProtocolError::TooShort {
            needed,
            available: bytes.len(),
        })
    } else {
        Ok(())
    }
}

/// Reads the `n:u8` prefixed key name at offset 2.
///
/// Invalid UTF-8 is decoded lossily; such a name never matches the code table.
fn read_key_name(bytes: &[u8]) -> Result<String, ProtocolError> {
    let declared = bytes[2] as usize;
    let start = 3;
    let available = bytes.len() - start;
    if declared > available {
        return Err(ProtocolError::KeyNameTruncated { declared, available });
    }
    Ok(String::from_utf8_lossy(&bytes[start..start + declared]).into_owned())
}

// Callers have already checked the length with `require_len`.
fn read_i16(buf: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
