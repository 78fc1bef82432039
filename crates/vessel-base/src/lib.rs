#![deny(clippy::unwrap_used)]

//! Shared pieces for the `vessel` containers: the captured fault object, the access
//! error taxonomy and the capture configuration.

mod config;
mod error;
mod fault;

pub use config::{CAPTURE_PANICS_VAR, CaptureConfig, TRACE_CAPTURES_VAR};
pub use error::{AccessError, ConfigError};
pub use fault::{Fault, FaultKind, Message, Panicked};
