//! Key and button translation tables.
//!
//! The canonical keyboard representation handed to the driver is USB HID
//! Usage IDs (page 0x07, Keyboard/Keypad).  Senders name keys with
//! platform-neutral strings, translated by [`code_table::KeyCodeTable`].
//! Gamepad buttons are translated to the Xbox 360 report layout by
//! [`xusb`].

pub mod code_table;
pub mod hid;
pub mod xusb;

pub use code_table::KeyCodeTable;
pub use hid::HidKeyCode;
