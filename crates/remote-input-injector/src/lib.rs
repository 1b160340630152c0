//! remote-input-injector library entry point.
//!
//! Shared by the two binaries (`remote-input-hid` and `remote-input-pad`)
//! and by the integration tests in `tests/`.
//!
//! # What does an injector do? (for beginners)
//!
//! An injector is a small process that owns one virtual device.  It binds a
//! UDP socket on the loopback interface and waits.  Every datagram that
//! arrives is one input event: a mouse movement, a key press, or a complete
//! gamepad snapshot.  The injector decodes it and replays it on the virtual
//! device, so the machine behaves as if a physical keyboard, mouse, or
//! controller were attached.
//!
//! The crate is split the same way for both processes:
//!
//! 1. `infrastructure::network` receives datagrams, one at a time.
//! 2. `application::inject_input` decodes each one and picks the backend call.
//! 3. `infrastructure::injector` performs the call on the virtual device.
//! 4. `infrastructure::config` and `cli` wire it all together at startup.

/// Application layer: the decode-and-dispatch use case.
pub mod application;

/// Command-line entry shared by both binaries.
pub mod cli;

/// Infrastructure layer: backends, sockets, and configuration.
pub mod infrastructure;
