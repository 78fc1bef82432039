use vessel_base::{AccessError, CaptureConfig, Fault, FaultKind};

use crate::capture::{capture, guard, guard_result};
use crate::{Either, Optional, OptionalSource};

/// The outcome of a computation that may fail: the produced value or the captured fault.
///
/// Faults are captured at three boundaries only: [`Attempt::of`] (and its variants),
/// [`Attempt::map`]/[`Attempt::map_try`], and [`Attempt::flat_map`]. A computation fails by
/// returning `Err` or by panicking; panics are trapped as long as the process-wide
/// [`CaptureConfig`] says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    Success(T),
    Failure(Fault),
}

impl<T> Attempt<T> {
    /// Evaluates `computation`, storing its error (or panic) instead of propagating it.
    pub fn of<E>(computation: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<Fault>,
    {
        Self::of_with(CaptureConfig::current(), computation)
    }

    pub fn of_with<E>(config: &CaptureConfig, computation: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<Fault>,
    {
        guard_result(config, "of", computation)
    }

    /// Evaluates a computation that can only fail by panicking.
    ///
    /// Trapping a panic does not silence the panic hook: the default hook still prints the
    /// panic message to stderr. Install a quieter hook with `std::panic::set_hook` when that
    /// output is unwanted.
    pub fn run(computation: impl FnOnce() -> T) -> Self {
        guard(CaptureConfig::current(), "run", || Attempt::Success(computation()))
    }

    pub fn success(value: T) -> Self {
        Attempt::Success(value)
    }

    pub fn failure(fault: impl Into<Fault>) -> Self {
        Attempt::Failure(fault.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Attempt::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Attempt::Failure(_))
    }

    /// Returns the value, or raises the stored fault again.
    pub fn get(&self) -> Result<&T, Fault> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(fault) => Err(fault.clone()),
        }
    }

    pub fn get_cause(&self) -> Result<&Fault, AccessError> {
        match self {
            Attempt::Failure(fault) => Ok(fault),
            Attempt::Success(_) => Err(AccessError::CauseOnSuccess),
        }
    }

    /// Fails a rejected value with [`AccessError::PredicateFailed`]. A `Failure` is returned
    /// unchanged.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.filter_or_else(predicate, |_| Fault::predicate_failed())
    }

    /// Fails a rejected value with the fault built from it. A `Failure` keeps its original
    /// fault; neither closure runs.
    pub fn filter_or_else<F>(
        self,
        predicate: impl FnOnce(&T) -> bool,
        fault: impl FnOnce(&T) -> F,
    ) -> Self
    where
        F: Into<Fault>,
    {
        match self {
            Attempt::Success(value) => {
                if predicate(&value) {
                    Attempt::Success(value)
                } else {
                    Attempt::Failure(fault(&value).into())
                }
            }
            Attempt::Failure(_) => self,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attempt<U> {
        match self {
            Attempt::Success(value) => {
                guard(CaptureConfig::current(), "map", || Attempt::Success(f(value)))
            }
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    /// Like [`Attempt::map`] for a fallible `f`; its error becomes the failure.
    pub fn map_try<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Attempt<U>
    where
        E: Into<Fault>,
    {
        match self {
            Attempt::Success(value) => {
                guard_result(CaptureConfig::current(), "map_try", || f(value))
            }
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Attempt<U>) -> Attempt<U> {
        match self {
            Attempt::Success(value) => guard(CaptureConfig::current(), "flat_map", || f(value)),
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    pub fn peek(self, consumer: impl FnOnce(&T)) -> Self {
        if let Attempt::Success(value) = &self {
            consumer(value);
        }
        self
    }

    pub fn on_failure(self, consumer: impl FnOnce(&Fault)) -> Self {
        if let Attempt::Failure(fault) = &self {
            consumer(fault);
        }
        self
    }

    pub fn recover(self, f: impl FnOnce(Fault) -> T) -> Self {
        match self {
            Attempt::Success(_) => self,
            Attempt::Failure(fault) => Attempt::Success(f(fault)),
        }
    }

    pub fn get_or_else(self, default: T) -> T {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(_) => default,
        }
    }

    pub fn get_or_else_with(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(_) => supplier(),
        }
    }

    pub fn get_or_else_throw<E>(self, fault: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(_) => Err(fault()),
        }
    }

    pub fn into_nullable(self) -> Option<T> {
        match self {
            Attempt::Success(value) => Some(value),
            Attempt::Failure(_) => None,
        }
    }

    pub fn fold<U>(
        self,
        on_failure: impl FnOnce(Fault) -> U,
        on_success: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Attempt::Success(value) => on_success(value),
            Attempt::Failure(fault) => on_failure(fault),
        }
    }

    pub fn or_else(self, alternative: Attempt<T>) -> Self {
        match self {
            Attempt::Success(_) => self,
            Attempt::Failure(_) => alternative,
        }
    }

    pub fn or_else_with(self, supplier: impl FnOnce() -> Attempt<T>) -> Self {
        match self {
            Attempt::Success(_) => self,
            Attempt::Failure(_) => supplier(),
        }
    }

    pub fn to_option(self) -> Optional<T> {
        Optional::of(self.into_nullable())
    }

    pub fn to_either(self) -> Either<Fault, T> {
        match self {
            Attempt::Success(value) => Either::Right(value),
            Attempt::Failure(fault) => Either::Left(fault),
        }
    }

    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(fault) => Err(fault),
        }
    }

    /// `true` when this is a failure captured from a panic.
    pub fn panicked(&self) -> bool {
        matches!(self, Attempt::Failure(fault) if fault.kind() == FaultKind::Panicked)
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Into<Fault>,
{
    fn from(result: Result<T, E>) -> Self {
        capture(result)
    }
}

impl<T> OptionalSource<T> for Attempt<T> {
    fn into_option(self) -> Option<T> {
        self.into_nullable()
    }
}
