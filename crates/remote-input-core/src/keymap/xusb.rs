//! Xbox 360 (XUSB) report flags for virtual-controller drivers.
//!
//! Virtual controller drivers that emulate an Xbox 360 pad take a report with
//! a 16-bit `wButtons` word whose flag values differ from the protocol's
//! bit ordinals.  [`hid_buttons_to_xusb`] rebuilds that word from scratch on
//! every report, so a button missing from the protocol mask is released.

use crate::domain::gamepad::{GamepadButton, GamepadButtons};

pub const XUSB_DPAD_UP: u16 = 0x0001;
pub const XUSB_DPAD_DOWN: u16 = 0x0002;
pub const XUSB_DPAD_LEFT: u16 = 0x0004;
pub const XUSB_DPAD_RIGHT: u16 = 0x0008;
pub const XUSB_START: u16 = 0x0010;
pub const XUSB_BACK: u16 = 0x0020;
pub const XUSB_LEFT_THUMB: u16 = 0x0040;
pub const XUSB_RIGHT_THUMB: u16 = 0x0080;
pub const XUSB_LEFT_SHOULDER: u16 = 0x0100;
pub const XUSB_RIGHT_SHOULDER: u16 = 0x0200;
pub const XUSB_A: u16 = 0x1000;
pub const XUSB_B: u16 = 0x2000;
pub const XUSB_X: u16 = 0x4000;
pub const XUSB_Y: u16 = 0x8000;

/// Returns the XUSB flag for a single protocol button.
pub fn button_to_xusb(button: GamepadButton) -> u16 {
    match button {
        GamepadButton::South => XUSB_A,
        GamepadButton::East => XUSB_B,
        GamepadButton::West => XUSB_X,
        GamepadButton::North => XUSB_Y,
        GamepadButton::LeftShoulder => XUSB_LEFT_SHOULDER,
        GamepadButton::RightShoulder => XUSB_RIGHT_SHOULDER,
        GamepadButton::Back => XUSB_BACK,
        GamepadButton::Start => XUSB_START,
        GamepadButton::LeftThumb => XUSB_LEFT_THUMB,
        GamepadButton::RightThumb => XUSB_RIGHT_THUMB,
        GamepadButton::DpadUp => XUSB_DPAD_UP,
        GamepadButton::DpadDown => XUSB_DPAD_DOWN,
        GamepadButton::DpadLeft => XUSB_DPAD_LEFT,
        GamepadButton::DpadRight => XUSB_DPAD_RIGHT,
    }
}

/// Builds the complete XUSB `wButtons` word for a protocol button mask.
pub fn hid_buttons_to_xusb(buttons: GamepadButtons) -> u16 {
    buttons.pressed().fold(0, |acc, b| acc | button_to_xusb(b))
}

impl GamepadButtons {
    /// Shorthand for [`hid_buttons_to_xusb`].
    pub fn to_xusb(self) -> u16 {
        hid_buttons_to_xusb(self)
    }
}
