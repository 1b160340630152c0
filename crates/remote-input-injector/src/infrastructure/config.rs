//! TOML configuration for the injector processes.
//!
//! Both binaries read the same file.  Each one uses the top-level settings
//! plus its own channel section:
//!
//! ```toml
//! log_level = "info"
//!
//! [hid]
//! bind_address = "127.0.0.1"
//! port = 9999
//! recv_buffer_size = 1024
//! backend = "trace"
//! on_init_failure = "degrade"
//!
//! [pad]
//! port = 9998
//! on_init_failure = "fail_fast"
//! ```
//!
//! Default location:
//! - Windows:  `%APPDATA%\RemoteInput\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/remote-input/config.toml` or `~/.config/remote-input/config.toml`
//! - macOS:    `~/Library/Application Support/RemoteInput/config.toml`
//!
//! # Partial sections (for beginners)
//!
//! Every key in a channel section is optional.  The two channels have
//! different defaults (port, buffer size, init-failure policy), so a section
//! is read as a [`ChannelSection`] of `Option`s and then resolved against the
//! channel's defaults by [`RelayConfig::resolve`].  Command-line overrides
//! arrive as a `ChannelSection` too and win over the file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use remote_input_core::protocol::messages::{
    EventTag, DEFAULT_HID_PORT, DEFAULT_PAD_PORT, MAX_INPUT_DATAGRAM_LEN,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::Channel;
use crate::infrastructure::injector::{BackendKind, InitFailurePolicy};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `bind_address` is not an IP address.
    #[error("invalid bind address: '{0}'")]
    InvalidAddress(String),

    /// The receive buffer cannot hold the channel's longest datagram.
    #[error("recv_buffer_size {size} is too small for the {channel} channel (minimum {min})")]
    BufferTooSmall {
        channel: &'static str,
        size: usize,
        min: usize,
    },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level file contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelayConfig {
    /// `tracing` filter used when `RUST_LOG` and `--log-level` are absent.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Keyboard/mouse channel.
    #[serde(default)]
    pub hid: ChannelSection,
    /// Gamepad channel.
    #[serde(default)]
    pub pad: ChannelSection,
}

/// One channel's settings as written in the file; absent keys take the
/// channel's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_buffer_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_init_failure: Option<InitFailurePolicy>,
}

impl ChannelSection {
    /// Returns `self` with every key set in `overrides` replaced.
    pub fn merged_with(&self, overrides: &ChannelSection) -> ChannelSection {
        ChannelSection {
            bind_address: overrides
                .bind_address
                .clone()
                .or_else(|| self.bind_address.clone()),
            port: overrides.port.or(self.port),
            recv_buffer_size: overrides.recv_buffer_size.or(self.recv_buffer_size),
            backend: overrides.backend.or(self.backend),
            on_init_failure: overrides.on_init_failure.or(self.on_init_failure),
        }
    }
}

/// Fully resolved settings for one running channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub bind_addr: SocketAddr,
    pub recv_buffer_size: usize,
    pub backend: BackendKind,
    pub on_init_failure: InitFailurePolicy,
}

impl ChannelConfig {
    /// Settings a channel runs with when nothing is configured.
    pub fn defaults(channel: Channel) -> Self {
        let (port, recv_buffer_size) = match channel {
            Channel::Hid => (DEFAULT_HID_PORT, 1024),
            Channel::Gamepad => (DEFAULT_PAD_PORT, 64),
        };
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port),
            recv_buffer_size,
            backend: BackendKind::Trace,
            on_init_failure: InitFailurePolicy::default_for(channel),
        }
    }
}

impl RelayConfig {
    /// The file section for `channel`.
    pub fn section(&self, channel: Channel) -> &ChannelSection {
        match channel {
            Channel::Hid => &self.hid,
            Channel::Gamepad => &self.pad,
        }
    }

    /// Resolves `channel`'s settings: `overrides`, then the file, then defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if `bind_address` is not an IP
    /// address, and [`ConfigError::BufferTooSmall`] if the receive buffer
    /// cannot hold the longest datagram the channel carries.
    pub fn resolve(
        &self,
        channel: Channel,
        overrides: &ChannelSection,
    ) -> Result<ChannelConfig, ConfigError> {
        let section = self.section(channel).merged_with(overrides);
        let defaults = ChannelConfig::defaults(channel);

        let ip = match &section.bind_address {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidAddress(raw.clone()))?,
            None => defaults.bind_addr.ip(),
        };
        let port = section.port.unwrap_or(defaults.bind_addr.port());

        let recv_buffer_size = section.recv_buffer_size.unwrap_or(defaults.recv_buffer_size);
        let min = min_buffer_size(channel);
        if recv_buffer_size < min {
            return Err(ConfigError::BufferTooSmall {
                channel: channel.name(),
                size: recv_buffer_size,
                min,
            });
        }

        Ok(ChannelConfig {
            bind_addr: SocketAddr::new(ip, port),
            recv_buffer_size,
            backend: section.backend.unwrap_or(defaults.backend),
            on_init_failure: section.on_init_failure.unwrap_or(defaults.on_init_failure),
        })
    }
}

/// Smallest buffer that holds the longest datagram the channel carries.
///
/// A shorter buffer makes Unix truncate long key events, which then fail to
/// decode.
fn min_buffer_size(channel: Channel) -> usize {
    match channel {
        Channel::Hid => MAX_INPUT_DATAGRAM_LEN,
        Channel::Gamepad => EventTag::GamepadState.min_len(),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            hid: ChannelSection::default(),
            pad: ChannelSection::default(),
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Resolves the full path of the platform config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Where the loaded configuration came from.
///
/// Loading runs before the log subscriber exists, so the caller logs this
/// once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// The platform file does not exist; built-in defaults are used.
    Missing(PathBuf),
    /// No platform config directory could be determined; built-in defaults are used.
    NoPlatformDir,
}

/// A parsed config file together with its [`ConfigSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: RelayConfig,
    pub source: ConfigSource,
}

/// Loads the configuration.
///
/// With `explicit` set, that file must exist.  Otherwise the platform config
/// file is read if present, and defaults are used if it is not (or if no
/// platform config directory can be determined).
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return Ok(LoadedConfig {
            config: read_config(path)?,
            source: ConfigSource::File(path.to_path_buf()),
        });
    }

    let path = match config_file_path() {
        Ok(path) => path,
        Err(ConfigError::NoPlatformConfigDir) => {
            return Ok(LoadedConfig {
                config: RelayConfig::default(),
                source: ConfigSource::NoPlatformDir,
            });
        }
        Err(e) => return Err(e),
    };

    match read_config(&path) {
        Ok(config) => Ok(LoadedConfig {
            config,
            source: ConfigSource::File(path),
        }),
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(LoadedConfig {
                config: RelayConfig::default(),
                source: ConfigSource::Missing(path),
            })
        }
        Err(e) => Err(e),
    }
}

/// Reads and parses one config file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid TOML for [`RelayConfig`].
pub fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Resolves the platform config base directory including the `RemoteInput` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("RemoteInput"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("remote-input"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("RemoteInput")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
