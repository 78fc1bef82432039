use serde::{Deserialize, Serialize};
use vessel_base::AccessError;

use crate::{Optional, OptionalSource};

/// A value tagged as one of two alternatives.
///
/// The type is value-neutral, but every transformation is right-biased: `map`, `flat_map`,
/// `filter` and the `get_or_else` family act on `Right` and pass `Left` through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn get(&self) -> Result<&R, AccessError> {
        match self {
            Either::Right(value) => Ok(value),
            Either::Left(_) => Err(AccessError::GetOnLeft),
        }
    }

    pub fn get_left(&self) -> Result<&L, AccessError> {
        match self {
            Either::Left(value) => Ok(value),
            Either::Right(_) => Err(AccessError::GetLeftOnRight),
        }
    }

    /// Keeps a `Right` only when `predicate` accepts it. A `Left` is always kept and the
    /// predicate is not consulted.
    pub fn filter(self, predicate: impl FnOnce(&R) -> bool) -> Optional<Self> {
        match self {
            Either::Right(value) => Optional::when(predicate(&value), Either::Right(value)),
            left @ Either::Left(_) => Optional::Some(left),
        }
    }

    /// Turns a rejected `Right` into a `Left` built from the rejected value.
    pub fn filter_or_else(
        self,
        predicate: impl FnOnce(&R) -> bool,
        left: impl FnOnce(R) -> L,
    ) -> Self {
        match self {
            Either::Right(value) => {
                if predicate(&value) {
                    Either::Right(value)
                } else {
                    Either::Left(left(value))
                }
            }
            Either::Left(_) => self,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Either<L, U> {
        match self {
            Either::Right(value) => Either::Right(f(value)),
            Either::Left(value) => Either::Left(value),
        }
    }

    pub fn map_left<U>(self, f: impl FnOnce(L) -> U) -> Either<U, R> {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(R) -> Either<L, U>) -> Either<L, U> {
        match self {
            Either::Right(value) => f(value),
            Either::Left(value) => Either::Left(value),
        }
    }

    pub fn peek(self, consumer: impl FnOnce(&R)) -> Self {
        if let Either::Right(value) = &self {
            consumer(value);
        }
        self
    }

    pub fn peek_left(self, consumer: impl FnOnce(&L)) -> Self {
        if let Either::Left(value) = &self {
            consumer(value);
        }
        self
    }

    pub fn get_or_else(self, default: R) -> R {
        match self {
            Either::Right(value) => value,
            Either::Left(_) => default,
        }
    }

    pub fn get_or_else_with(self, supplier: impl FnOnce() -> R) -> R {
        match self {
            Either::Right(value) => value,
            Either::Left(_) => supplier(),
        }
    }

    pub fn get_or_else_throw<E>(self, fault: impl FnOnce() -> E) -> Result<R, E> {
        match self {
            Either::Right(value) => Ok(value),
            Either::Left(_) => Err(fault()),
        }
    }

    pub fn into_nullable(self) -> Option<R> {
        match self {
            Either::Right(value) => Some(value),
            Either::Left(_) => None,
        }
    }

    pub fn fold<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    pub fn or_else(self, alternative: Either<L, R>) -> Self {
        match self {
            Either::Right(_) => self,
            Either::Left(_) => alternative,
        }
    }

    pub fn or_else_with(self, supplier: impl FnOnce() -> Either<L, R>) -> Self {
        match self {
            Either::Right(_) => self,
            Either::Left(_) => supplier(),
        }
    }

    pub fn to_option(self) -> Optional<R> {
        Optional::of(self.into_nullable())
    }

    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Right(value) => Ok(value),
            Either::Left(value) => Err(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

impl<L, R> OptionalSource<R> for Either<L, R> {
    fn into_option(self) -> Option<R> {
        self.into_nullable()
    }
}
