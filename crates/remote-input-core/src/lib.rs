//! # remote-input-core
//!
//! Shared library for the remote-input injectors containing the datagram
//! wire protocol, the gamepad state model, and the key code tables.
//!
//! This crate is used by both injector processes (keyboard/mouse and gamepad).
//! It has zero dependencies on OS APIs, driver SDKs, or network sockets.
//!
//! # Architecture overview (for beginners)
//!
//! A controller process somewhere on the machine captures keyboard, mouse and
//! gamepad input and fires it at the injectors as small UDP datagrams on the
//! loopback interface.  The injectors replay each datagram on a virtual
//! device so the target machine behaves as if the input were local.
//!
//! This crate defines:
//!
//! - **`protocol`** – How bytes travel over the socket.  Every datagram is
//!   `[version][tag][payload…]` and decodes into exactly one [`InputEvent`].
//!
//! - **`domain`** – The gamepad full-state snapshot and its button mask.
//!
//! - **`keymap`** – Translation tables: platform-neutral key names to USB HID
//!   Usage IDs, and gamepad buttons to the Xbox 360 report flags.

pub mod domain;
pub mod keymap;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `remote_input_core::InputEvent` instead of the full module path.
pub use domain::gamepad::{GamepadButton, GamepadButtons, GamepadState};
pub use keymap::code_table::KeyCodeTable;
pub use keymap::hid::HidKeyCode;
pub use protocol::codec::{
    decode_gamepad, decode_input, encode_event, parse_gamepad, parse_input, ProtocolError,
};
pub use protocol::messages::InputEvent;
