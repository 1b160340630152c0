//! InjectInputUseCase: turns received datagrams into virtual device input.
//!
//! This use case sits at the application layer.  It decodes each datagram
//! for its [`Channel`], resolves key names through the [`KeyCodeTable`], and
//! delegates to an [`InputInjector`] trait object for the actual device
//! calls.  Backend implementations live in the infrastructure layer.
//!
//! # Dispatch rules (for beginners)
//!
//! | Event                          | Backend call                 |
//! |--------------------------------|------------------------------|
//! | `MouseMove { dx, dy }`         | `mouse_move(dx, dy)`         |
//! | `MouseButton { pressed: true }`| `mouse_button_down(button)`  |
//! | `MouseButton { pressed: false }`| `mouse_button_up(button)`   |
//! | `MouseWheel { dy }`            | `mouse_wheel(dy)`            |
//! | `Key { pressed: true }`        | `key_down(usage)`            |
//! | `Key { pressed: false }`       | `key_up(usage)`              |
//! | `Gamepad(state)`               | `update_gamepad(&state)`     |
//!
//! A malformed datagram and a key name missing from the table both end with
//! no backend call.  Neither is an error: the sender never hears back.

use std::sync::Arc;

use remote_input_core::{
    parse_gamepad, parse_input, GamepadState, InputEvent, KeyCodeTable, ProtocolError,
};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for injector backend operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InjectionError {
    /// The backend could not attach to its virtual device.
    #[error("injector initialization failed: {0}")]
    InitFailed(String),
    /// A single injection call was rejected by the backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Capability set of a virtual input device.
///
/// One implementation may cover either channel; the keyboard/mouse process
/// never calls [`update_gamepad`](InputInjector::update_gamepad) and the
/// gamepad process calls nothing else.
pub trait InputInjector: Send + Sync {
    /// Attaches to the underlying device.  Called once, before any other method.
    fn init(&self) -> Result<(), InjectionError>;

    /// Moves the pointer by a relative offset.
    fn mouse_move(&self, dx: i16, dy: i16) -> Result<(), InjectionError>;

    fn mouse_button_down(&self, button: u8) -> Result<(), InjectionError>;

    fn mouse_button_up(&self, button: u8) -> Result<(), InjectionError>;

    /// Scrolls the vertical wheel by `dy` (120 per notch).
    fn mouse_wheel(&self, dy: i16) -> Result<(), InjectionError>;

    /// Presses the key with the given HID Usage ID (never 0).
    fn key_down(&self, usage: u16) -> Result<(), InjectionError>;

    /// Releases the key with the given HID Usage ID (never 0).
    fn key_up(&self, usage: u16) -> Result<(), InjectionError>;

    /// Replaces the full controller state.
    fn update_gamepad(&self, state: &GamepadState) -> Result<(), InjectionError>;
}

/// Which datagram family a process receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Keyboard and mouse events (tags 0x01–0x06).
    Hid,
    /// Gamepad full-state reports (tag 0x10).
    Gamepad,
}

impl Channel {
    /// Short name used in logs and config sections.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Hid => "hid",
            Channel::Gamepad => "pad",
        }
    }

    /// Decodes a datagram with this channel's wire rules.
    ///
    /// # Errors
    ///
    /// Returns the [`ProtocolError`] explaining why the datagram is dropped.
    pub fn decode(self, bytes: &[u8]) -> Result<InputEvent, ProtocolError> {
        match self {
            Channel::Hid => parse_input(bytes),
            Channel::Gamepad => parse_gamepad(bytes).map(InputEvent::Gamepad),
        }
    }
}

/// What happened to one datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Exactly one backend call was made and succeeded.
    Injected,
    /// A key event named a key the table does not know; nothing was injected.
    Unmapped { name: String },
    /// The datagram was malformed; nothing was injected.
    Dropped(ProtocolError),
}

/// The Inject Input use case.
pub struct InjectInputUseCase {
    injector: Arc<dyn InputInjector>,
    table: &'static KeyCodeTable,
    channel: Channel,
}

impl InjectInputUseCase {
    /// Creates a use case backed by the process-wide [`KeyCodeTable`].
    pub fn new(injector: Arc<dyn InputInjector>, channel: Channel) -> Self {
        Self {
            injector,
            table: KeyCodeTable::shared(),
            channel,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Decodes and dispatches one datagram.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] only when the backend rejects the call.
    /// Malformed datagrams and unmapped keys are reported through
    /// [`DispatchOutcome`] instead.
    pub fn handle_datagram(&self, bytes: &[u8]) -> Result<DispatchOutcome, InjectionError> {
        match self.channel.decode(bytes) {
            Ok(event) => self.dispatch(&event),
            Err(reason) => {
                trace!(
                    channel = self.channel.name(),
                    len = bytes.len(),
                    %reason,
                    "dropping malformed datagram"
                );
                Ok(DispatchOutcome::Dropped(reason))
            }
        }
    }

    /// Sends a decoded event to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] if the backend call fails.
    pub fn dispatch(&self, event: &InputEvent) -> Result<DispatchOutcome, InjectionError> {
        let injector = self.injector.as_ref();
        match event {
            InputEvent::MouseMove { dx, dy } => injector.mouse_move(*dx, *dy)?,
            InputEvent::MouseButton {
                button,
                pressed: true,
            } => injector.mouse_button_down(*button)?,
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => injector.mouse_button_up(*button)?,
            InputEvent::MouseWheel { dy } => injector.mouse_wheel(*dy)?,
            InputEvent::Key { code, pressed } => {
                let usage = self.table.lookup(code);
                if usage == 0 {
                    debug!(key = %code, "unmapped key name, not injecting");
                    return Ok(DispatchOutcome::Unmapped { name: code.clone() });
                }
                if *pressed {
                    injector.key_down(usage)?;
                } else {
                    injector.key_up(usage)?;
                }
            }
            InputEvent::Gamepad(state) => injector.update_gamepad(state)?,
        }
        Ok(DispatchOutcome::Injected)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
