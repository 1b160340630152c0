//! Infrastructure layer: everything that touches the OS.

pub mod config;
pub mod injector;
pub mod network;
