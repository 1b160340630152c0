//! Protocol module containing the event types and the datagram codec.

pub mod codec;
pub mod messages;

pub use codec::{decode_gamepad, decode_input, encode_event, parse_gamepad, parse_input, ProtocolError};
pub use messages::*;
