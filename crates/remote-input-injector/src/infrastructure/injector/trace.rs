//! Backend that logs every primitive instead of driving a device.
//!
//! The real virtual-HID and virtual-controller drivers are installed and
//! versioned separately.  `TraceInjector` implements the same capability set
//! and writes one `debug` event per call, which makes it the default backend
//! for observing traffic on a machine without the drivers.
//!
//! Gamepad reports are logged with the Xbox 360 (XUSB) `wButtons` word a
//! virtual-controller driver would receive, so the translation can be checked
//! from the log alone.

use remote_input_core::keymap::xusb::hid_buttons_to_xusb;
use remote_input_core::{GamepadState, HidKeyCode};
use tracing::{debug, info};

use crate::application::{Channel, InjectionError, InputInjector};

#[derive(Debug, Clone, Copy)]
pub struct TraceInjector {
    channel: Channel,
}

impl TraceInjector {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl InputInjector for TraceInjector {
    fn init(&self) -> Result<(), InjectionError> {
        info!(channel = self.channel.name(), "trace backend attached");
        Ok(())
    }

    fn mouse_move(&self, dx: i16, dy: i16) -> Result<(), InjectionError> {
        debug!(dx, dy, "mouse move");
        Ok(())
    }

    fn mouse_button_down(&self, button: u8) -> Result<(), InjectionError> {
        debug!(button, "mouse button down");
        Ok(())
    }

    fn mouse_button_up(&self, button: u8) -> Result<(), InjectionError> {
        debug!(button, "mouse button up");
        Ok(())
    }

    fn mouse_wheel(&self, dy: i16) -> Result<(), InjectionError> {
        debug!(dy, "mouse wheel");
        Ok(())
    }

    fn key_down(&self, usage: u16) -> Result<(), InjectionError> {
        debug!(
            usage = format_args!("{usage:#04x}"),
            key = HidKeyCode::from_u16(usage).name().unwrap_or("?"),
            "key down"
        );
        Ok(())
    }

    fn key_up(&self, usage: u16) -> Result<(), InjectionError> {
        debug!(
            usage = format_args!("{usage:#04x}"),
            key = HidKeyCode::from_u16(usage).name().unwrap_or("?"),
            "key up"
        );
        Ok(())
    }

    fn update_gamepad(&self, state: &GamepadState) -> Result<(), InjectionError> {
        debug!(
            lx = state.left_x,
            ly = state.left_y,
            rx = state.right_x,
            ry = state.right_y,
            lt = state.left_trigger,
            rt = state.right_trigger,
            buttons = format_args!("{:#06x}", hid_buttons_to_xusb(state.buttons)),
            "gamepad report"
        );
        Ok(())
    }
}
