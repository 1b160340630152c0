//! remote-input gamepad injector.
//!
//! Listens on a loopback UDP port (default 9998) and applies every gamepad
//! full-state datagram to the configured virtual controller backend.  By
//! default the process exits if the controller cannot be created.
//!
//! # Usage
//!
//! ```text
//! remote-input-pad [OPTIONS]
//!
//! Options:
//!   --config <PATH>              Config file [env: REMOTE_INPUT_CONFIG]
//!   --log-level <FILTER>         Log filter [env: REMOTE_INPUT_LOG_LEVEL]
//!   --bind <IP>                  Bind address [env: REMOTE_INPUT_PAD_BIND]
//!   --port <PORT>                UDP port [env: REMOTE_INPUT_PAD_PORT]
//!   --backend <trace|noop>       Backend [env: REMOTE_INPUT_PAD_BACKEND]
//!   --on-init-failure <degrade|fail_fast>
//!                                [env: REMOTE_INPUT_PAD_ON_INIT_FAILURE]
//! ```

use clap::Parser;

use remote_input_injector::application::Channel;
use remote_input_injector::cli::{run_channel, CommonArgs, PadArgs};

/// Gamepad injector for the remote-input relay.
#[derive(Debug, Parser)]
#[command(
    name = "remote-input-pad",
    about = "Applies gamepad full-state datagrams from a loopback UDP port",
    version
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    channel: PadArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_channel(Channel::Gamepad, cli.common, cli.channel.into_overrides())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use remote_input_injector::infrastructure::injector::BackendKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_backend_and_bind() {
        let cli = Cli::parse_from(["remote-input-pad", "--backend", "noop", "--bind", "::1"]);

        assert_eq!(cli.channel.backend, Some(BackendKind::Noop));
        assert_eq!(cli.channel.bind.as_deref(), Some("::1"));
    }
}
