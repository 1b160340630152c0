//! Domain model shared by the injectors.
//!
//! Only the gamepad has a real model: keyboard and mouse events are transient
//! and fully described by [`crate::protocol::messages::InputEvent`], but a
//! gamepad datagram is a complete device snapshot with a fixed button layout.

pub mod gamepad;

pub use gamepad::{GamepadButton, GamepadButtons, GamepadState};
