//! Application layer: use cases for the injector processes.

pub mod inject_input;

pub use inject_input::{Channel, DispatchOutcome, InjectInputUseCase, InjectionError, InputInjector};
