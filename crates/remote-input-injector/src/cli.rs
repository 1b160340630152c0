//! Startup shared by `remote-input-hid` and `remote-input-pad`.
//!
//! Each binary parses its own `clap` struct (so the two processes get
//! distinct environment variables), converts channel flags into a
//! [`ChannelSection`] of overrides, and calls [`run_channel`].
//!
//! # What happens at startup
//!
//! 1. The config file is loaded (`--config`, else the platform location).
//! 2. Logging is initialised: `RUST_LOG`, else `--log-level`, else the
//!    file's `log_level`.
//! 3. The channel's settings are resolved: flags, then file, then defaults.
//! 4. The backend is built and initialised under the init-failure policy.
//! 5. The UDP socket is bound and the receive loop runs until the process
//!    is killed or the socket fails.

use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::{Channel, InjectInputUseCase};
use crate::infrastructure::config::{load_config, ChannelSection, ConfigSource};
use crate::infrastructure::injector::{
    build_injector, prepare_injector, BackendKind, InitFailurePolicy,
};
use crate::infrastructure::network::DatagramListener;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Options common to both injectors.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to the TOML config file.
    ///
    /// Defaults to the platform config directory; a missing default file is
    /// not an error, a missing explicit file is.
    #[arg(long, env = "REMOTE_INPUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// `tracing` filter (e.g. `info`, `debug`, `remote_input_injector=trace`).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, env = "REMOTE_INPUT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Keyboard/mouse channel overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct HidArgs {
    /// IP address to bind.  Anything but loopback is logged as a warning.
    #[arg(long, env = "REMOTE_INPUT_HID_BIND")]
    pub bind: Option<String>,

    /// UDP port to listen on [default: 9999].
    #[arg(long, env = "REMOTE_INPUT_HID_PORT")]
    pub port: Option<u16>,

    /// Backend that receives the injected input [default: trace].
    #[arg(long, value_enum, env = "REMOTE_INPUT_HID_BACKEND")]
    pub backend: Option<BackendKind>,

    /// What to do if the backend cannot initialise [default: degrade].
    #[arg(long, value_enum, env = "REMOTE_INPUT_HID_ON_INIT_FAILURE")]
    pub on_init_failure: Option<InitFailurePolicy>,
}

/// Gamepad channel overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct PadArgs {
    /// IP address to bind.  Anything but loopback is logged as a warning.
    #[arg(long, env = "REMOTE_INPUT_PAD_BIND")]
    pub bind: Option<String>,

    /// UDP port to listen on [default: 9998].
    #[arg(long, env = "REMOTE_INPUT_PAD_PORT")]
    pub port: Option<u16>,

    /// Backend that receives the controller reports [default: trace].
    #[arg(long, value_enum, env = "REMOTE_INPUT_PAD_BACKEND")]
    pub backend: Option<BackendKind>,

    /// What to do if the virtual controller cannot be created [default: fail_fast].
    #[arg(long, value_enum, env = "REMOTE_INPUT_PAD_ON_INIT_FAILURE")]
    pub on_init_failure: Option<InitFailurePolicy>,
}

impl HidArgs {
    pub fn into_overrides(self) -> ChannelSection {
        ChannelSection {
            bind_address: self.bind,
            port: self.port,
            recv_buffer_size: None,
            backend: self.backend,
            on_init_failure: self.on_init_failure,
        }
    }
}

impl PadArgs {
    pub fn into_overrides(self) -> ChannelSection {
        ChannelSection {
            bind_address: self.bind,
            port: self.port,
            recv_buffer_size: None,
            backend: self.backend,
            on_init_failure: self.on_init_failure,
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if `fallback` is not a valid filter directive or a
/// subscriber is already installed.
pub fn init_logging(fallback: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("invalid log level '{fallback}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => info!("loaded config from {}", path.display()),
        ConfigSource::Missing(path) => {
            debug!("no config file at {}; using defaults", path.display())
        }
        ConfigSource::NoPlatformDir => debug!("no platform config directory; using defaults"),
    }
}

// ── Entry ─────────────────────────────────────────────────────────────────────

/// Runs one injector channel until the socket fails.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the backend fails to
/// initialise under [`InitFailurePolicy::FailFast`], the socket cannot be
/// bound, or a receive fails.
pub fn run_channel(
    channel: Channel,
    common: CommonArgs,
    overrides: ChannelSection,
) -> anyhow::Result<()> {
    let loaded = load_config(common.config.as_deref()).context("failed to load configuration")?;
    init_logging(common.log_level.as_deref().unwrap_or(loaded.config.log_level.as_str()))?;
    log_config_source(&loaded.source);
    let file = loaded.config;

    let cfg = file
        .resolve(channel, &overrides)
        .with_context(|| format!("invalid [{}] configuration", channel.name()))?;

    info!(
        "remote-input {} injector starting: backend={:?}, on_init_failure={:?}",
        channel.name(),
        cfg.backend,
        cfg.on_init_failure
    );

    let injector = prepare_injector(build_injector(cfg.backend, channel), cfg.on_init_failure)
        .context("injector backend unavailable")?;
    let use_case = InjectInputUseCase::new(injector, channel);

    let mut listener = DatagramListener::bind(cfg.bind_addr, cfg.recv_buffer_size)?;
    let result = listener.run(|datagram| {
        if let Err(e) = use_case.handle_datagram(datagram) {
            warn!("injection failed: {e}");
        }
        ControlFlow::Continue(())
    });

    if let Err(e) = &result {
        error!("{} receive loop stopped: {e}", channel.name());
    }
    result.context("receive loop failed")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hid_args_become_overrides() {
        // Arrange
        let args = HidArgs {
            bind: Some("0.0.0.0".to_string()),
            port: Some(1234),
            backend: Some(BackendKind::Noop),
            on_init_failure: None,
        };

        // Act
        let overrides = args.into_overrides();

        // Assert
        assert_eq!(overrides.bind_address.as_deref(), Some("0.0.0.0"));
        assert_eq!(overrides.port, Some(1234));
        assert_eq!(overrides.backend, Some(BackendKind::Noop));
        assert_eq!(overrides.on_init_failure, None);
        assert_eq!(overrides.recv_buffer_size, None);
    }

    #[test]
    fn test_empty_pad_args_override_nothing() {
        assert_eq!(PadArgs::default().into_overrides(), ChannelSection::default());
    }
}
