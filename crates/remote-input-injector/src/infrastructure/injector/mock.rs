//! Recording injector backend for tests.
//!
//! # Why a recording backend?
//!
//! A real backend drives a virtual device driver that needs administrator
//! rights, actually moves the cursor, and cannot be observed from test code.
//! `MockInjector` replaces every device call with in-memory recording: each
//! call is pushed into a `Mutex<Vec<...>>` so assertions can inspect exactly
//! what was injected and in what order.
//!
//! # Usage in tests
//!
//! ```
//! use std::sync::Arc;
//! use remote_input_injector::application::{Channel, InjectInputUseCase};
//! use remote_input_injector::infrastructure::injector::mock::MockInjector;
//!
//! let mock = Arc::new(MockInjector::new());
//! let use_case = InjectInputUseCase::new(mock.clone(), Channel::Hid);
//!
//! use_case.handle_datagram(&[1, 2, 0]).unwrap();
//!
//! assert_eq!(*mock.button_downs.lock().unwrap(), vec![0]);
//! ```
//!
//! # Failure flags
//!
//! `fail_init` makes [`init`](InputInjector::init) fail, for testing the
//! init-failure policy.  `should_fail` makes every injection call fail, for
//! testing how callers handle backend errors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use remote_input_core::GamepadState;

use crate::application::{InjectionError, InputInjector};

/// A backend that records all calls without touching any device.
#[derive(Debug, Default)]
pub struct MockInjector {
    /// `(dx, dy)` pairs passed to `mouse_move`.
    pub mouse_moves: Mutex<Vec<(i16, i16)>>,
    /// Button indices passed to `mouse_button_down`.
    pub button_downs: Mutex<Vec<u8>>,
    /// Button indices passed to `mouse_button_up`.
    pub button_ups: Mutex<Vec<u8>>,
    /// Deltas passed to `mouse_wheel`.
    pub wheels: Mutex<Vec<i16>>,
    /// HID usages passed to `key_down`.
    pub key_downs: Mutex<Vec<u16>>,
    /// HID usages passed to `key_up`.
    pub key_ups: Mutex<Vec<u16>>,
    /// Every state passed to `update_gamepad`.
    pub gamepad_reports: Mutex<Vec<GamepadState>>,
    /// When `true`, `init` returns [`InjectionError::InitFailed`].
    pub fail_init: bool,
    /// When `true`, every injection call returns [`InjectionError::Backend`].
    pub should_fail: bool,
    inits: AtomicUsize,
}

impl MockInjector {
    /// Creates a mock with empty records and both failure flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `init` fails.
    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    /// Creates a mock whose injection calls all fail.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Number of times `init` has been called.
    pub fn init_calls(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }

    /// Total number of injection calls recorded so far.
    pub fn total_calls(&self) -> usize {
        len(&self.mouse_moves)
            + len(&self.button_downs)
            + len(&self.button_ups)
            + len(&self.wheels)
            + len(&self.key_downs)
            + len(&self.key_ups)
            + len(&self.gamepad_reports)
    }

    fn record<T>(&self, log: &Mutex<Vec<T>>, value: T) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Backend("mock failure".into()));
        }
        log.lock().unwrap_or_else(PoisonError::into_inner).push(value);
        Ok(())
    }
}

fn len<T>(log: &Mutex<Vec<T>>) -> usize {
    log.lock().unwrap_or_else(PoisonError::into_inner).len()
}

impl InputInjector for MockInjector {
    fn init(&self) -> Result<(), InjectionError> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        if self.fail_init {
            return Err(InjectionError::InitFailed("mock device unavailable".into()));
        }
        Ok(())
    }

    fn mouse_move(&self, dx: i16, dy: i16) -> Result<(), InjectionError> {
        self.record(&self.mouse_moves, (dx, dy))
    }

    fn mouse_button_down(&self, button: u8) -> Result<(), InjectionError> {
        self.record(&self.button_downs, button)
    }

    fn mouse_button_up(&self, button: u8) -> Result<(), InjectionError> {
        self.record(&self.button_ups, button)
    }

    fn mouse_wheel(&self, dy: i16) -> Result<(), InjectionError> {
        self.record(&self.wheels, dy)
    }

    fn key_down(&self, usage: u16) -> Result<(), InjectionError> {
        self.record(&self.key_downs, usage)
    }

    fn key_up(&self, usage: u16) -> Result<(), InjectionError> {
        self.record(&self.key_ups, usage)
    }

    fn update_gamepad(&self, state: &GamepadState) -> Result<(), InjectionError> {
        self.record(&self.gamepad_reports, *state)
    }
}
