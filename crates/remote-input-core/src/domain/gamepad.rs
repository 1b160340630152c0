//! Gamepad full-state snapshot and button mask.
//!
//! # Full-state replace (for beginners)
//!
//! The gamepad channel never sends "button X went down".  Every datagram is a
//! complete picture of the controller: both sticks, both triggers and every
//! button.  The injector hands that picture to the virtual controller as-is,
//! so a button missing from the mask is released even if the previous
//! datagram had it pressed.  If a datagram is lost, the next one that arrives
//! corrects the device state.
//!
//! # Button bit layout
//!
//! | Bit | Button         | Bit | Button       |
//! |-----|----------------|-----|--------------|
//! | 0   | South (A)      | 7   | Start        |
//! | 1   | East (B)       | 8   | Left thumb   |
//! | 2   | West (X)       | 9   | Right thumb  |
//! | 3   | North (Y)      | 10  | D-pad up     |
//! | 4   | Left shoulder  | 11  | D-pad down   |
//! | 5   | Right shoulder | 12  | D-pad left   |
//! | 6   | Back           | 13  | D-pad right  |
//!
//! Bits 14–31 are reserved and stripped on decode.

use serde::{Deserialize, Serialize};

/// One of the 14 defined gamepad buttons, numbered by its bit ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GamepadButton {
    South = 0,
    East = 1,
    West = 2,
    North = 3,
    LeftShoulder = 4,
    RightShoulder = 5,
    Back = 6,
    Start = 7,
    LeftThumb = 8,
    RightThumb = 9,
    DpadUp = 10,
    DpadDown = 11,
    DpadLeft = 12,
    DpadRight = 13,
}

impl GamepadButton {
    /// Every defined button in bit order.
    pub const ALL: [GamepadButton; 14] = [
        GamepadButton::South,
        GamepadButton::East,
        GamepadButton::West,
        GamepadButton::North,
        GamepadButton::LeftShoulder,
        GamepadButton::RightShoulder,
        GamepadButton::Back,
        GamepadButton::Start,
        GamepadButton::LeftThumb,
        GamepadButton::RightThumb,
        GamepadButton::DpadUp,
        GamepadButton::DpadDown,
        GamepadButton::DpadLeft,
        GamepadButton::DpadRight,
    ];

    /// Returns the single-bit mask for this button.
    pub const fn mask(self) -> u32 {
        1 << (self as u8)
    }
}

/// Gamepad button bitmask with reserved bits cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamepadButtons(u32);

impl GamepadButtons {
    /// Mask covering the 14 defined button bits.
    pub const DEFINED: u32 = 0x3FFF;

    /// Builds a mask from the raw wire value, discarding reserved bits.
    pub const fn from_wire(raw: u32) -> Self {
        Self(raw & Self::DEFINED)
    }

    /// Builds a mask with exactly the given buttons pressed.
    pub fn from_buttons(buttons: &[GamepadButton]) -> Self {
        Self(buttons.iter().fold(0, |acc, b| acc | b.mask()))
    }

    /// Returns the raw mask (reserved bits always zero).
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_pressed(self, button: GamepadButton) -> bool {
        self.0 & button.mask() != 0
    }

    /// Iterates the pressed buttons in bit order.
    pub fn pressed(self) -> impl Iterator<Item = GamepadButton> {
        GamepadButton::ALL
            .into_iter()
            .filter(move |b| self.is_pressed(*b))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Complete gamepad snapshot carried by one gamepad datagram.
///
/// Stick axes are absolute signed 16-bit positions; triggers are absolute
/// 0–255 magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadState {
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub buttons: GamepadButtons,
}

impl GamepadState {
    /// The neutral controller: sticks centred, triggers and buttons released.
    pub fn neutral() -> Self {
        Self::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
