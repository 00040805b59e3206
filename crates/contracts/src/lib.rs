//! # Contracts
//!
//! Shared data structures for the streamer crates: the flat `Settings` record
//! read from `config.json`, the fixed invocation constants and the
//! configuration error type.
//! Business crates depend on this crate only, never on each other in reverse.

mod constants;
mod error;
mod settings;

pub use constants::*;
pub use error::*;
pub use settings::Settings;
