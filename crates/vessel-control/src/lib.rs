#![deny(clippy::unwrap_used)]

//! Immutable two-variant containers: [`Optional`] (presence/absence), [`Either`] (one of
//! two alternatives) and [`Attempt`] (value or captured fault), with conversions between
//! them.

mod attempt;
mod capture;
mod either;
mod optional;

pub use attempt::Attempt;
pub use either::Either;
pub use optional::{Optional, OptionalSource};
pub use vessel_base::{AccessError, CaptureConfig, ConfigError, Fault, FaultKind, Message, Panicked};
