//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! This is the key representation handed to the virtual keyboard driver.
//! Senders identify keys by platform-neutral name (the DOM
//! `KeyboardEvent.code` strings such as `"KeyA"` or `"ShiftLeft"`), and the
//! injector translates each name to its HID Usage ID before injection.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a unique number to
//! every key on a keyboard.  These numbers are called *Usage IDs* and they are
//! grouped by *Usage Page*.  All keyboard keys are on page 0x07 ("Keyboard/Keypad").
//!
//! | Key          | HID Usage ID |
//! |--------------|-------------|
//! | Letter A     | 0x04        |
//! | Letter B     | 0x05        |
//! | Enter        | 0x28        |
//! | Left Ctrl    | 0xE0        |
//!
//! HID codes represent **physical key positions**, not characters, which is
//! why the left and right variants of Control, Shift, Alt and Meta are
//! distinct codes.
//!
//! # The `Unknown` sentinel
//!
//! [`HidKeyCode::Unknown`] (value 0x0000) stands for "no mapping".  The
//! injector never forwards it to the driver.

use serde::{Deserialize, Serialize};

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID on the keyboard/keypad page.
/// [`HidKeyCode::Unknown`] represents any key that has no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    // ISO key next to left shift, and the application key (HID 0x64–0x65)
    IntlBackslash = 0x64,
    ContextMenu = 0x65,

    // Extended function keys (HID 0x68–0x73)
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,

    // Modifier keys (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    /// Sentinel for keys with no HID mapping.
    Unknown = 0x0000,
}

impl HidKeyCode {
    /// Every mapped key code, in usage order.  [`HidKeyCode::Unknown`] is excluded.
    pub const ALL: [HidKeyCode; 117] = [
        HidKeyCode::KeyA,
        HidKeyCode::KeyB,
        HidKeyCode::KeyC,
        HidKeyCode::KeyD,
        HidKeyCode::KeyE,
        HidKeyCode::KeyF,
        HidKeyCode::KeyG,
        HidKeyCode::KeyH,
        HidKeyCode::KeyI,
        HidKeyCode::KeyJ,
        HidKeyCode::KeyK,
        HidKeyCode::KeyL,
        HidKeyCode::KeyM,
        HidKeyCode::KeyN,
        HidKeyCode::KeyO,
        HidKeyCode::KeyP,
        HidKeyCode::KeyQ,
        HidKeyCode::KeyR,
        HidKeyCode::KeyS,
        HidKeyCode::KeyT,
        HidKeyCode::KeyU,
        HidKeyCode::KeyV,
        HidKeyCode::KeyW,
        HidKeyCode::KeyX,
        HidKeyCode::KeyY,
        HidKeyCode::KeyZ,
        HidKeyCode::Digit1,
        HidKeyCode::Digit2,
        HidKeyCode::Digit3,
        HidKeyCode::Digit4,
        HidKeyCode::Digit5,
        HidKeyCode::Digit6,
        HidKeyCode::Digit7,
        HidKeyCode::Digit8,
        HidKeyCode::Digit9,
        HidKeyCode::Digit0,
        HidKeyCode::Enter,
        HidKeyCode::Escape,
        HidKeyCode::Backspace,
        HidKeyCode::Tab,
        HidKeyCode::Space,
        HidKeyCode::Minus,
        HidKeyCode::Equal,
        HidKeyCode::BracketLeft,
        HidKeyCode::BracketRight,
        HidKeyCode::Backslash,
        HidKeyCode::Semicolon,
        HidKeyCode::Quote,
        HidKeyCode::Backquote,
        HidKeyCode::Comma,
        HidKeyCode::Period,
        HidKeyCode::Slash,
        HidKeyCode::CapsLock,
        HidKeyCode::F1,
        HidKeyCode::F2,
        HidKeyCode::F3,
        HidKeyCode::F4,
        HidKeyCode::F5,
        HidKeyCode::F6,
        HidKeyCode::F7,
        HidKeyCode::F8,
        HidKeyCode::F9,
        HidKeyCode::F10,
        HidKeyCode::F11,
        HidKeyCode::F12,
        HidKeyCode::PrintScreen,
        HidKeyCode::ScrollLock,
        HidKeyCode::Pause,
        HidKeyCode::Insert,
        HidKeyCode::Home,
        HidKeyCode::PageUp,
        HidKeyCode::Delete,
        HidKeyCode::End,
        HidKeyCode::PageDown,
        HidKeyCode::ArrowRight,
        HidKeyCode::ArrowLeft,
        HidKeyCode::ArrowDown,
        HidKeyCode::ArrowUp,
        HidKeyCode::NumLock,
        HidKeyCode::NumpadDivide,
        HidKeyCode::NumpadMultiply,
        HidKeyCode::NumpadSubtract,
        HidKeyCode::NumpadAdd,
        HidKeyCode::NumpadEnter,
        HidKeyCode::Numpad1,
        HidKeyCode::Numpad2,
        HidKeyCode::Numpad3,
        HidKeyCode::Numpad4,
        HidKeyCode::Numpad5,
        HidKeyCode::Numpad6,
        HidKeyCode::Numpad7,
        HidKeyCode::Numpad8,
        HidKeyCode::Numpad9,
        HidKeyCode::Numpad0,
        HidKeyCode::NumpadDecimal,
        HidKeyCode::IntlBackslash,
        HidKeyCode::ContextMenu,
        HidKeyCode::F13,
        HidKeyCode::F14,
        HidKeyCode::F15,
        HidKeyCode::F16,
        HidKeyCode::F17,
        HidKeyCode::F18,
        HidKeyCode::F19,
        HidKeyCode::F20,
        HidKeyCode::F21,
        HidKeyCode::F22,
        HidKeyCode::F23,
        HidKeyCode::F24,
        HidKeyCode::ControlLeft,
        HidKeyCode::ShiftLeft,
        HidKeyCode::AltLeft,
        HidKeyCode::MetaLeft,
        HidKeyCode::ControlRight,
        HidKeyCode::ShiftRight,
        HidKeyCode::AltRight,
        HidKeyCode::MetaRight,
    ];

    /// Converts a raw u16 HID Usage ID to a [`HidKeyCode`].
    ///
    /// Returns [`HidKeyCode::Unknown`] if the value does not correspond to a
    /// known key code variant.
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x04 => HidKeyCode::KeyA,
            0x05 => HidKeyCode::KeyB,
            0x06 => HidKeyCode::KeyC,
            0x07 => HidKeyCode::KeyD,
            0x08 => HidKeyCode::KeyE,
            0x09 => HidKeyCode::KeyF,
            0x0A => HidKeyCode::KeyG,
            0x0B => HidKeyCode::KeyH,
            0x0C => HidKeyCode::KeyI,
            0x0D => HidKeyCode::KeyJ,
            0x0E => HidKeyCode::KeyK,
            0x0F => HidKeyCode::KeyL,
            0x10 => HidKeyCode::KeyM,
            0x11 => HidKeyCode::KeyN,
            0x12 => HidKeyCode::KeyO,
            0x13 => HidKeyCode::KeyP,
            0x14 => HidKeyCode::KeyQ,
            0x15 => HidKeyCode::KeyR,
            0x16 => HidKeyCode::KeyS,
            0x17 => HidKeyCode::KeyT,
            0x18 => HidKeyCode::KeyU,
            0x19 => HidKeyCode::KeyV,
            0x1A => HidKeyCode::KeyW,
            0x1B => HidKeyCode::KeyX,
            0x1C => HidKeyCode::KeyY,
            0x1D => HidKeyCode::KeyZ,
            0x1E => HidKeyCode::Digit1,
            0x1F => HidKeyCode::Digit2,
            0x20 => HidKeyCode::Digit3,
            0x21 => HidKeyCode::Digit4,
            0x22 => HidKeyCode::Digit5,
            0x23 => HidKeyCode::Digit6,
            0x24 => HidKeyCode::Digit7,
            0x25 => HidKeyCode::Digit8,
            0x26 => HidKeyCode::Digit9,
            0x27 => HidKeyCode::Digit0,
            0x28 => HidKeyCode::Enter,
            0x29 => HidKeyCode::Escape,
            0x2A => HidKeyCode::Backspace,
            0x2B => HidKeyCode::Tab,
            0x2C => HidKeyCode::Space,
            0x2D => HidKeyCode::Minus,
            0x2E => HidKeyCode::Equal,
            0x2F => HidKeyCode::BracketLeft,
            0x30 => HidKeyCode::BracketRight,
            0x31 => HidKeyCode::Backslash,
            0x33 => HidKeyCode::Semicolon,
            0x34 => HidKeyCode::Quote,
            0x35 => HidKeyCode::Backquote,
            0x36 => HidKeyCode::Comma,
            0x37 => HidKeyCode::Period,
            0x38 => HidKeyCode::Slash,
            0x39 => HidKeyCode::CapsLock,
            0x3A => HidKeyCode::F1,
            0x3B => HidKeyCode::F2,
            0x3C => HidKeyCode::F3,
            0x3D => HidKeyCode::F4,
            0x3E => HidKeyCode::F5,
            0x3F => HidKeyCode::F6,
            0x40 => HidKeyCode::F7,
            0x41 => HidKeyCode::F8,
            0x42 => HidKeyCode::F9,
            0x43 => HidKeyCode::F10,
            0x44 => HidKeyCode::F11,
            0x45 => HidKeyCode::F12,
            0x46 => HidKeyCode::PrintScreen,
            0x47 => HidKeyCode::ScrollLock,
            0x48 => HidKeyCode::Pause,
            0x49 => HidKeyCode::Insert,
            0x4A => HidKeyCode::Home,
            0x4B => HidKeyCode::PageUp,
            0x4C => HidKeyCode::Delete,
            0x4D => HidKeyCode::End,
            0x4E => HidKeyCode::PageDown,
            0x4F => HidKeyCode::ArrowRight,
            0x50 => HidKeyCode::ArrowLeft,
            0x51 => HidKeyCode::ArrowDown,
            0x52 => HidKeyCode::ArrowUp,
            0x53 => HidKeyCode::NumLock,
            0x54 => HidKeyCode::NumpadDivide,
            0x55 => HidKeyCode::NumpadMultiply,
            0x56 => HidKeyCode::NumpadSubtract,
            0x57 => HidKeyCode::NumpadAdd,
            0x58 => HidKeyCode::NumpadEnter,
            0x59 => HidKeyCode::Numpad1,
            0x5A => HidKeyCode::Numpad2,
            0x5B => HidKeyCode::Numpad3,
            0x5C => HidKeyCode::Numpad4,
            0x5D => HidKeyCode::Numpad5,
            0x5E => HidKeyCode::Numpad6,
            0x5F => HidKeyCode::Numpad7,
            0x60 => HidKeyCode::Numpad8,
            0x61 => HidKeyCode::Numpad9,
            0x62 => HidKeyCode::Numpad0,
            0x63 => HidKeyCode::NumpadDecimal,
            0x64 => HidKeyCode::IntlBackslash,
            0x65 => HidKeyCode::ContextMenu,
            0x68 => HidKeyCode::F13,
            0x69 => HidKeyCode::F14,
            0x6A => HidKeyCode::F15,
            0x6B => HidKeyCode::F16,
            0x6C => HidKeyCode::F17,
            0x6D => HidKeyCode::F18,
            0x6E => HidKeyCode::F19,
            0x6F => HidKeyCode::F20,
            0x70 => HidKeyCode::F21,
            0x71 => HidKeyCode::F22,
            0x72 => HidKeyCode::F23,
            0x73 => HidKeyCode::F24,
            0xE0 => HidKeyCode::ControlLeft,
            0xE1 => HidKeyCode::ShiftLeft,
            0xE2 => HidKeyCode::AltLeft,
            0xE3 => HidKeyCode::MetaLeft,
            0xE4 => HidKeyCode::ControlRight,
            0xE5 => HidKeyCode::ShiftRight,
            0xE6 => HidKeyCode::AltRight,
            0xE7 => HidKeyCode::MetaRight,
            _ => HidKeyCode::Unknown,
        }
    }

    /// Returns the raw USB HID Usage ID value for this key code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the platform-neutral key name (DOM `KeyboardEvent.code`) for
    /// this key, or `None` for [`HidKeyCode::Unknown`].
    pub fn name(self) -> Option<&'static str> {
        match self {
            HidKeyCode::KeyA => Some("KeyA"),
            HidKeyCode::KeyB => Some("KeyB"),
            HidKeyCode::KeyC => Some("KeyC"),
            HidKeyCode::KeyD => Some("KeyD"),
            HidKeyCode::KeyE => Some("KeyE"),
            HidKeyCode::KeyF => Some("KeyF"),
            HidKeyCode::KeyG => Some("KeyG"),
            HidKeyCode::KeyH => Some("KeyH"),
            HidKeyCode::KeyI => Some("KeyI"),
            HidKeyCode::KeyJ => Some("KeyJ"),
            HidKeyCode::KeyK => Some("KeyK"),
            HidKeyCode::KeyL => Some("KeyL"),
            HidKeyCode::KeyM => Some("KeyM"),
            HidKeyCode::KeyN => Some("KeyN"),
            HidKeyCode::KeyO => Some("KeyO"),
            HidKeyCode::KeyP => Some("KeyP"),
            HidKeyCode::KeyQ => Some("KeyQ"),
            HidKeyCode::KeyR => Some("KeyR"),
            HidKeyCode::KeyS => Some("KeyS"),
            HidKeyCode::KeyT => Some("KeyT"),
            HidKeyCode::KeyU => Some("KeyU"),
            HidKeyCode::KeyV => Some("KeyV"),
            HidKeyCode::KeyW => Some("KeyW"),
            HidKeyCode::KeyX => Some("KeyX"),
            HidKeyCode::KeyY => Some("KeyY"),
            HidKeyCode::KeyZ => Some("KeyZ"),
            HidKeyCode::Digit1 => Some("Digit1"),
            HidKeyCode::Digit2 => Some("Digit2"),
            HidKeyCode::Digit3 => Some("Digit3"),
            HidKeyCode::Digit4 => Some("Digit4"),
            HidKeyCode::Digit5 => Some("Digit5"),
            HidKeyCode::Digit6 => Some("Digit6"),
            HidKeyCode::Digit7 => Some("Digit7"),
            HidKeyCode::Digit8 => Some("Digit8"),
            HidKeyCode::Digit9 => Some("Digit9"),
            HidKeyCode::Digit0 => Some("Digit0"),
            HidKeyCode::Enter => Some("Enter"),
            HidKeyCode::Escape => Some("Escape"),
            HidKeyCode::Backspace => Some("Backspace"),
            HidKeyCode::Tab => Some("Tab"),
            HidKeyCode::Space => Some("Space"),
            HidKeyCode::Minus => Some("Minus"),
            HidKeyCode::Equal => Some("Equal"),
            HidKeyCode::BracketLeft => Some("BracketLeft"),
            HidKeyCode::BracketRight => Some("BracketRight"),
            HidKeyCode::Backslash => Some("Backslash"),
            HidKeyCode::Semicolon => Some("Semicolon"),
            HidKeyCode::Quote => Some("Quote"),
            HidKeyCode::Backquote => Some("Backquote"),
            HidKeyCode::Comma => Some("Comma"),
            HidKeyCode::Period => Some("Period"),
            HidKeyCode::Slash => Some("Slash"),
            HidKeyCode::CapsLock => Some("CapsLock"),
            HidKeyCode::F1 => Some("F1"),
            HidKeyCode::F2 => Some("F2"),
            HidKeyCode::F3 => Some("F3"),
            HidKeyCode::F4 => Some("F4"),
            HidKeyCode::F5 => Some("F5"),
            HidKeyCode::F6 => Some("F6"),
            HidKeyCode::F7 => Some("F7"),
            HidKeyCode::F8 => Some("F8"),
            HidKeyCode::F9 => Some("F9"),
            HidKeyCode::F10 => Some("F10"),
            HidKeyCode::F11 => Some("F11"),
            HidKeyCode::F12 => Some("F12"),
            HidKeyCode::PrintScreen => Some("PrintScreen"),
            HidKeyCode::ScrollLock => Some("ScrollLock"),
            HidKeyCode::Pause => Some("Pause"),
            HidKeyCode::Insert => Some("Insert"),
            HidKeyCode::Home => Some("Home"),
            HidKeyCode::PageUp => Some("PageUp"),
            HidKeyCode::Delete => Some("Delete"),
            HidKeyCode::End => Some("End"),
            HidKeyCode::PageDown => Some("PageDown"),
            HidKeyCode::ArrowRight => Some("ArrowRight"),
            HidKeyCode::ArrowLeft => Some("ArrowLeft"),
            HidKeyCode::ArrowDown => Some("ArrowDown"),
            HidKeyCode::ArrowUp => Some("ArrowUp"),
            HidKeyCode::NumLock => Some("NumLock"),
            HidKeyCode::NumpadDivide => Some("NumpadDivide"),
            HidKeyCode::NumpadMultiply => Some("NumpadMultiply"),
            HidKeyCode::NumpadSubtract => Some("NumpadSubtract"),
            HidKeyCode::NumpadAdd => Some("NumpadAdd"),
            HidKeyCode::NumpadEnter => Some("NumpadEnter"),
            HidKeyCode::Numpad1 => Some("Numpad1"),
            HidKeyCode::Numpad2 => Some("Numpad2"),
            HidKeyCode::Numpad3 => Some("Numpad3"),
            HidKeyCode::Numpad4 => Some("Numpad4"),
            HidKeyCode::Numpad5 => Some("Numpad5"),
            HidKeyCode::Numpad6 => Some("Numpad6"),
            HidKeyCode::Numpad7 => Some("Numpad7"),
            HidKeyCode::Numpad8 => Some("Numpad8"),
            HidKeyCode::Numpad9 => Some("Numpad9"),
            HidKeyCode::Numpad0 => Some("Numpad0"),
            HidKeyCode::NumpadDecimal => Some("NumpadDecimal"),
            HidKeyCode::IntlBackslash => Some("IntlBackslash"),
            HidKeyCode::ContextMenu => Some("ContextMenu"),
            HidKeyCode::F13 => Some("F13"),
            HidKeyCode::F14 => Some("F14"),
            HidKeyCode::F15 => Some("F15"),
            HidKeyCode::F16 => Some("F16"),
            HidKeyCode::F17 => Some("F17"),
            HidKeyCode::F18 => Some("F18"),
            HidKeyCode::F19 => Some("F19"),
            HidKeyCode::F20 => Some("F20"),
            HidKeyCode::F21 => Some("F21"),
            HidKeyCode::F22 => Some("F22"),
            HidKeyCode::F23 => Some("F23"),
            HidKeyCode::F24 => Some("F24"),
            HidKeyCode::ControlLeft => Some("ControlLeft"),
            HidKeyCode::ShiftLeft => Some("ShiftLeft"),
            HidKeyCode::AltLeft => Some("AltLeft"),
            HidKeyCode::MetaLeft => Some("MetaLeft"),
            HidKeyCode::ControlRight => Some("ControlRight"),
            HidKeyCode::ShiftRight => Some("ShiftRight"),
            HidKeyCode::AltRight => Some("AltRight"),
            HidKeyCode::MetaRight => Some("MetaRight"),
            HidKeyCode::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spot checks against the HID Usage Tables.
    const STANDARD_KEYS: &[(u16, HidKeyCode)] = &[
        (0x04, HidKeyCode::KeyA),
        (0x1D, HidKeyCode::KeyZ),
        (0x1E, HidKeyCode::Digit1),
        (0x27, HidKeyCode::Digit0),
        (0x28, HidKeyCode::Enter),
        (0x29, HidKeyCode::Escape),
        (0x2A, HidKeyCode::Backspace),
        (0x2B, HidKeyCode::Tab),
        (0x2C, HidKeyCode::Space),
        (0x39, HidKeyCode::CapsLock),
        (0x3A, HidKeyCode::F1),
        (0x45, HidKeyCode::F12),
        (0x49, HidKeyCode::Insert),
        (0x4C, HidKeyCode::Delete),
        (0x52, HidKeyCode::ArrowUp),
        (0x58, HidKeyCode::NumpadEnter),
        (0x62, HidKeyCode::Numpad0),
        (0x64, HidKeyCode::IntlBackslash),
        (0x65, HidKeyCode::ContextMenu),
        (0x68, HidKeyCode::F13),
        (0x73, HidKeyCode::F24),
        (0xE0, HidKeyCode::ControlLeft),
        (0xE3, HidKeyCode::MetaLeft),
        (0xE4, HidKeyCode::ControlRight),
        (0xE7, HidKeyCode::MetaRight),
    ];

    #[test]
    fn test_from_u16_produces_correct_key_codes_for_standard_keys() {
        for &(raw, expected) in STANDARD_KEYS {
            // Arrange / Act
            let result = HidKeyCode::from_u16(raw);

            // Assert
            assert_eq!(result, expected, "from_u16(0x{raw:04X}) should produce {expected:?}");
        }
    }

    #[test]
    fn test_every_mapped_code_round_trips_through_from_u16() {
        for code in HidKeyCode::ALL {
            assert_eq!(HidKeyCode::from_u16(code.as_u16()), code, "{code:?} did not round-trip");
        }
    }

    #[test]
    fn test_every_mapped_code_has_a_name_matching_its_variant() {
        for code in HidKeyCode::ALL {
            let name = code.name().expect("mapped codes have names");
            assert_eq!(format!("{code:?}"), name);
        }
    }

    #[test]
    fn test_unknown_u16_values_return_unknown() {
        // Values that are not assigned, or not covered, on the keyboard/keypad page
        for unassigned in [0x00, 0x01, 0x02, 0x03, 0x32, 0x66, 0x74, 0xA0, 0xFF] {
            assert_eq!(
                HidKeyCode::from_u16(unassigned),
                HidKeyCode::Unknown,
                "0x{unassigned:02X} should map to Unknown"
            );
        }
    }

    #[test]
    fn test_unknown_has_zero_code_and_no_name() {
        assert_eq!(HidKeyCode::Unknown.as_u16(), 0x0000);
        assert_eq!(HidKeyCode::Unknown.name(), None);
    }

    #[test]
    fn test_all_letter_keys_are_contiguous() {
        for (i, letter) in HidKeyCode::ALL[..26].iter().enumerate() {
            let expected_hid = 0x04u16 + i as u16;
            assert_eq!(letter.as_u16(), expected_hid, "{letter:?} should have HID code 0x{expected_hid:04X}");
        }
    }
}
