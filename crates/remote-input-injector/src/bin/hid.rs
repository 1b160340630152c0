//! remote-input keyboard/mouse injector.
//!
//! Listens on a loopback UDP port (default 9999) and replays every keyboard
//! and mouse datagram on the configured backend.
//!
//! # Usage
//!
//! ```text
//! remote-input-hid [OPTIONS]
//!
//! Options:
//!   --config <PATH>              Config file [env: REMOTE_INPUT_CONFIG]
//!   --log-level <FILTER>         Log filter [env: REMOTE_INPUT_LOG_LEVEL]
//!   --bind <IP>                  Bind address [env: REMOTE_INPUT_HID_BIND]
//!   --port <PORT>                UDP port [env: REMOTE_INPUT_HID_PORT]
//!   --backend <trace|noop>       Backend [env: REMOTE_INPUT_HID_BACKEND]
//!   --on-init-failure <degrade|fail_fast>
//!                                [env: REMOTE_INPUT_HID_ON_INIT_FAILURE]
//! ```

use clap::Parser;

use remote_input_injector::application::Channel;
use remote_input_injector::cli::{run_channel, CommonArgs, HidArgs};

/// Keyboard and mouse injector for the remote-input relay.
#[derive(Debug, Parser)]
#[command(
    name = "remote-input-hid",
    about = "Replays keyboard/mouse datagrams from a loopback UDP port",
    version
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    channel: HidArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_channel(Channel::Hid, cli.common, cli.channel.into_overrides())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
