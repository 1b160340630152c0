//! Injector backend implementations.
//!
//! | Backend           | Purpose                                              |
//! |-------------------|------------------------------------------------------|
//! | [`trace`]         | Logs every primitive; stands in for a device driver  |
//! | [`noop`]          | Accepts and discards everything (degraded mode)      |
//! | [`mock`]          | Records every call for test assertions               |
//!
//! The backend is chosen at startup from configuration by [`build_injector`],
//! then initialized by [`prepare_injector`], which applies the channel's
//! [`InitFailurePolicy`].

pub mod mock;
pub mod noop;
pub mod trace;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::application::{Channel, InjectionError, InputInjector};

use self::noop::NoopInjector;
use self::trace::TraceInjector;

/// Which backend a channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Log each primitive at `debug` level.
    Trace,
    /// Discard every call.
    Noop,
}

/// What to do when the backend cannot attach to its device at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InitFailurePolicy {
    /// Keep running and silently drop every injection.
    Degrade,
    /// Refuse to start.
    #[value(name = "fail_fast")]
    FailFast,
}

impl InitFailurePolicy {
    /// The startup behaviour each channel has when nothing is configured.
    ///
    /// The keyboard/mouse injector keeps listening so traffic can still be
    /// observed; the gamepad injector exits because it has nothing to drive.
    pub fn default_for(channel: Channel) -> Self {
        match channel {
            Channel::Hid => InitFailurePolicy::Degrade,
            Channel::Gamepad => InitFailurePolicy::FailFast,
        }
    }
}

/// Constructs the configured backend for `channel` (not yet initialized).
pub fn build_injector(kind: BackendKind, channel: Channel) -> Arc<dyn InputInjector> {
    match kind {
        BackendKind::Trace => Arc::new(TraceInjector::new(channel)),
        BackendKind::Noop => Arc::new(NoopInjector),
    }
}

/// Initializes `injector` once and applies `policy` if that fails.
///
/// # Errors
///
/// Returns [`InjectionError::InitFailed`] when `init()` fails and `policy`
/// is [`InitFailurePolicy::FailFast`].
pub fn prepare_injector(
    injector: Arc<dyn InputInjector>,
    policy: InitFailurePolicy,
) -> Result<Arc<dyn InputInjector>, InjectionError> {
    match injector.init() {
        Ok(()) => {
            info!("injector backend initialized");
            Ok(injector)
        }
        Err(e) => match policy {
            InitFailurePolicy::Degrade => {
                warn!("{e}; continuing without a device, injections will be dropped");
                Ok(Arc::new(NoopInjector))
            }
            InitFailurePolicy::FailFast => {
                error!("{e}");
                Err(match e {
                    InjectionError::InitFailed(_) => e,
                    InjectionError::Backend(msg) => InjectionError::InitFailed(msg),
                })
            }
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::injector::mock::MockInjector;

    #[test]
    fn test_prepare_returns_same_backend_on_success() {
        // Arrange
        let mock = Arc::new(MockInjector::new());
        let injector: Arc<dyn InputInjector> = mock.clone();

        // Act
        let prepared = prepare_injector(injector, InitFailurePolicy::FailFast).unwrap();
        prepared.key_down(0x04).unwrap();

        // Assert: calls reach the wrapped backend.
        assert_eq!(mock.init_calls(), 1);
        assert_eq!(*mock.key_downs.lock().unwrap(), vec![0x04]);
    }

    #[test]
    fn test_prepare_degrades_to_noop_on_init_failure() {
        // Arrange
        let mock = Arc::new(MockInjector::failing_init());
        let injector: Arc<dyn InputInjector> = mock.clone();

        // Act
        let prepared = prepare_injector(injector, InitFailurePolicy::Degrade).unwrap();
        prepared.key_down(0x04).unwrap();

        // Assert: the failed backend receives nothing further.
        assert!(mock.key_downs.lock().unwrap().is_empty());
    }

    #[test]
    fn test_prepare_fails_fast_on_init_failure() {
        let mock = Arc::new(MockInjector::failing_init());

        let result = prepare_injector(mock, InitFailurePolicy::FailFast);

        assert!(matches!(result, Err(InjectionError::InitFailed(_))));
    }

    #[test]
    fn test_default_policy_per_channel() {
        assert_eq!(
            InitFailurePolicy::default_for(Channel::Hid),
            InitFailurePolicy::Degrade
        );
        assert_eq!(
            InitFailurePolicy::default_for(Channel::Gamepad),
            InitFailurePolicy::FailFast
        );
    }

    #[test]
    fn test_build_injector_backends_initialize() {
        for kind in [BackendKind::Trace, BackendKind::Noop] {
            assert!(build_injector(kind, Channel::Hid).init().is_ok());
        }
    }

    #[test]
    fn test_policy_parses_from_snake_case_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: InitFailurePolicy,
            backend: BackendKind,
        }
        let w: Wrapper = toml::from_str("policy = \"fail_fast\"\nbackend = \"noop\"").unwrap();
        assert_eq!(w.policy, InitFailurePolicy::FailFast);
        assert_eq!(w.backend, BackendKind::Noop);
    }
}
