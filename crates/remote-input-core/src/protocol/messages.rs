//! All remote-input datagram event types.
//!
//! Every datagram carries exactly one event:
//!
//! ```text
//! [version:1][tag:1][payload:N]
//! ```
//!
//! There is no envelope length or checksum; the payload length is implied by
//! the tag and validated per tag by the codec.

use serde::{Deserialize, Serialize};

use crate::domain::gamepad::GamepadState;

// ── Protocol constants ────────────────────────────────────────────────────────

/// Current protocol version byte.
pub const PROTOCOL_VERSION: u8 = 0x01;

/// Size of the `[version][tag]` envelope in bytes.
pub const ENVELOPE_SIZE: usize = 2;

/// Longest keyboard/mouse datagram: a key event with a 255-byte name.
pub const MAX_INPUT_DATAGRAM_LEN: usize = 3 + u8::MAX as usize;

/// Default loopback port of the keyboard/mouse channel.
pub const DEFAULT_HID_PORT: u16 = 9999;

/// Default loopback port of the gamepad channel.
pub const DEFAULT_PAD_PORT: u16 = 9998;

// ── Event tags ────────────────────────────────────────────────────────────────

/// All event tag bytes defined by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventTag {
    // Keyboard/mouse channel
    MouseMove = 0x01,
    MouseButtonDown = 0x02,
    MouseButtonUp = 0x03,
    KeyDown = 0x04,
    KeyUp = 0x05,
    MouseWheel = 0x06,
    // Gamepad channel
    GamepadState = 0x10,
}

impl EventTag {
    /// Minimum datagram length (envelope included) for this tag.
    ///
    /// Key events are length-prefixed, so their real minimum is
    /// `3 + name_len`; the value returned here covers the prefix byte only.
    pub const fn min_len(self) -> usize {
        match self {
            EventTag::MouseMove => 6,
            EventTag::MouseButtonDown | EventTag::MouseButtonUp => 3,
            EventTag::KeyDown | EventTag::KeyUp => 3,
            EventTag::MouseWheel => 4,
            // 2 header + 4×i16 sticks + 2×u8 triggers + u32 buttons
            EventTag::GamepadState => 16,
        }
    }
}

impl TryFrom<u8> for EventTag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0x01 => Ok(EventTag::MouseMove),
            0x02 => Ok(EventTag::MouseButtonDown),
            0x03 => Ok(EventTag::MouseButtonUp),
            0x04 => Ok(EventTag::KeyDown),
            0x05 => Ok(EventTag::KeyUp),
            0x06 => Ok(EventTag::MouseWheel),
            0x10 => Ok(EventTag::GamepadState),
            _ => Err(()),
        }
    }
}

// ── Decoded events ────────────────────────────────────────────────────────────

/// A single decoded input event.
///
/// Exactly one variant is produced per valid datagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Relative pointer motion.
    MouseMove { dx: i16, dy: i16 },
    /// Mouse button press or release.
    ///
    /// By convention 0 = left, 1 = middle, 2 = right; other values are passed
    /// through to the backend unchanged.
    MouseButton { button: u8, pressed: bool },
    /// Vertical wheel delta.
    MouseWheel { dy: i16 },
    /// Key press or release identified by its platform-neutral name
    /// (`"KeyA"`, `"ArrowUp"`, `"ControlLeft"` …).
    Key { code: String, pressed: bool },
    /// Absolute gamepad snapshot that replaces the previous one.
    Gamepad(GamepadState),
}

impl InputEvent {
    /// Returns the wire tag that carries this event.
    pub fn tag(&self) -> EventTag {
        match self {
            InputEvent::MouseMove { .. } => EventTag::MouseMove,
            InputEvent::MouseButton { pressed: true, .. } => EventTag::MouseButtonDown,
            InputEvent::MouseButton { pressed: false, .. } => EventTag::MouseButtonUp,
            InputEvent::MouseWheel { .. } => EventTag::MouseWheel,
            InputEvent::Key { pressed: true, .. } => EventTag::KeyDown,
            InputEvent::Key { pressed: false, .. } => EventTag::KeyUp,
            InputEvent::Gamepad(_) => EventTag::GamepadState,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
