use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::AccessError;

/// How a fault entered an `Attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaultKind {
    /// Returned as an error by a computation, or handed to `Attempt::failure`.
    Raised,
    /// Caught while unwinding out of a computation.
    Panicked,
    /// Produced by a filter whose predicate rejected the value.
    Filtered,
}

/// Plain-text fault payload used by [`Fault::msg`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(pub String);

/// Payload of a fault captured from a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Panicked {
    pub message: String,
}

/// The captured fault of a failed `Attempt`.
///
/// Cloning is cheap: the underlying error is shared. `Fault` deliberately does not
/// implement [`std::error::Error`] itself so that every error type converts into it
/// through `From`; use [`Fault::as_error`] or the `Box<dyn Error>` conversion when an
/// error trait object is needed.
#[derive(Clone)]
pub struct Fault {
    kind: FaultKind,
    payload: TypeId,
    error: Arc<dyn Error + Send + Sync + 'static>,
}

impl Fault {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::with_kind(FaultKind::Raised, error)
    }

    pub fn with_kind<E>(kind: FaultKind, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind,
            payload: TypeId::of::<E>(),
            error: Arc::new(error),
        }
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// The fault recorded when a filter predicate rejects a value and no custom fault was given.
    pub fn predicate_failed() -> Self {
        Self::with_kind(FaultKind::Filtered, AccessError::PredicateFailed)
    }

    /// Builds a fault from the payload handed back by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        Self::with_kind(FaultKind::Panicked, Panicked { message })
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.error.is::<E>()
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Fault> for Box<dyn Error + Send + Sync + 'static> {
    fn from(fault: Fault) -> Self {
        Box::new(Shared(fault.error))
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Fault {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

/// Faults are equal when they share kind and payload type, and either the same payload or
/// the same rendered message.
impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.payload == other.payload
            && (Arc::ptr_eq(&self.error, &other.error) || self.message() == other.message())
    }
}

impl Eq for Fault {}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind)
            .field("message", &self.message())
            .finish()
    }
}

/// Lets a shared error escape as an owned `Box<dyn Error>` without cloning the error itself.
struct Shared(Arc<dyn Error + Send + Sync + 'static>);

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Shared {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use super::*;

    fn parse_fault() -> Fault {
        match "a".parse::<i32>() {
            Ok(_) => Fault::msg("parsed"),
            Err(err) => Fault::from(err),
        }
    }

    #[test]
    fn wraps_any_error_as_raised() {
        let fault = parse_fault();
        assert_eq!(fault.kind(), FaultKind::Raised);
        assert!(fault.is::<ParseIntError>());
        assert!(!fault.is::<Message>());
        assert_eq!(fault.message(), "invalid digit found in string");
    }

    #[test]
    fn message_faults_render_their_text() {
        let fault = Fault::msg("Error");
        assert_eq!(fault.to_string(), "Error");
        assert_eq!(fault.downcast_ref::<Message>(), Some(&Message("Error".into())));
    }

    #[test]
    fn panic_payloads_keep_their_message() {
        let from_str = Fault::from_panic(Box::new("boom"));
        let from_string = Fault::from_panic(Box::new(String::from("bang")));
        let opaque = Fault::from_panic(Box::new(7_u8));

        assert_eq!(from_str.kind(), FaultKind::Panicked);
        assert_eq!(from_str.message(), "boom");
        assert_eq!(from_string.message(), "bang");
        assert!(opaque.is::<Panicked>());
        insta::assert_snapshot!(opaque.message(), @"panic with a non-string payload");
    }

    #[test]
    fn predicate_failure_is_filtered_access_error() {
        let fault = Fault::predicate_failed();
        assert_eq!(fault.kind(), FaultKind::Filtered);
        assert_eq!(
            fault.downcast_ref::<AccessError>(),
            Some(&AccessError::PredicateFailed)
        );
    }

    #[test]
    fn equality_uses_kind_and_message() {
        let fault = Fault::msg("Error");
        assert_eq!(fault.clone(), fault);
        assert_eq!(Fault::msg("Error"), Fault::msg("Error"));
        assert_ne!(Fault::msg("Error"), Fault::msg("Bad"));
        assert_ne!(
            Fault::msg("boom"),
            Fault::with_kind(FaultKind::Panicked, Message("boom".into()))
        );
    }

    #[test]
    fn equality_requires_the_same_payload_type() {
        let parsed = parse_fault();
        let retyped = Fault::msg("invalid digit found in string");
        assert_eq!(parsed.message(), retyped.message());
        assert_ne!(parsed, retyped);
        assert_eq!(parsed, parse_fault());
    }

    #[test]
    fn debug_is_compact() {
        insta::assert_snapshot!(
            format!("{:?}", Fault::msg("Error")),
            @r#"Fault { kind: Raised, message: "Error" }"#
        );
    }

    #[test]
    fn converts_into_boxed_error() {
        let boxed: Box<dyn Error + Send + Sync> = parse_fault().into();
        assert_eq!(boxed.to_string(), "invalid digit found in string");
    }
}
