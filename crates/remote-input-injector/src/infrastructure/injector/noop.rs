//! Backend that accepts every call and does nothing.
//!
//! Used when a channel is configured with `backend = "noop"`, and as the
//! replacement backend after a failed `init()` under the degrade policy.

use remote_input_core::GamepadState;

use crate::application::{InjectionError, InputInjector};

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInjector;

impl InputInjector for NoopInjector {
    fn init(&self) -> Result<(), InjectionError> {
        Ok(())
    }

    fn mouse_move(&self, _dx: i16, _dy: i16) -> Result<(), InjectionError> {
        Ok(())
    }

    fn mouse_button_down(&self, _button: u8) -> Result<(), InjectionError> {
        Ok(())
    }

    fn mouse_button_up(&self, _button: u8) -> Result<(), InjectionError> {
        Ok(())
    }

    fn mouse_wheel(&self, _dy: i16) -> Result<(), InjectionError> {
        Ok(())
    }

    fn key_down(&self, _usage: u16) -> Result<(), InjectionError> {
        Ok(())
    }

    fn key_up(&self, _usage: u16) -> Result<(), InjectionError> {
        Ok(())
    }

    fn update_gamepad(&self, _state: &GamepadState) -> Result<(), InjectionError> {
        Ok(())
    }
}
