use serde::{Deserialize, Serialize};
use vessel_base::AccessError;

use crate::Either;

/// A source holding at most one value, which [`Optional::of_optional`] can bridge.
pub trait OptionalSource<T> {
    fn into_option(self) -> Option<T>;
}

impl<T> OptionalSource<T> for Option<T> {
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T, E> OptionalSource<T> for Result<T, E> {
    fn into_option(self) -> Option<T> {
        self.ok()
    }
}

impl<T> OptionalSource<T> for Optional<T> {
    fn into_option(self) -> Option<T> {
        self.into_nullable()
    }
}

/// Presence or absence of a value.
///
/// Unlike `std::option::Option`, every operation that would unwrap reports a typed
/// [`AccessError`] instead of panicking, and the "value or supplier" pairs make the lazy
/// alternative explicit (`get_or_else` vs `get_or_else_with`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// Lifts a nullable value: `None` becomes the empty variant.
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }

    /// Bridges a zero-or-one source: a std `Option`, the ok side of a `Result`, another
    /// `Optional`, the right side of an `Either` or the value of an `Attempt`.
    pub fn of_optional(source: impl OptionalSource<T>) -> Self {
        Self::of(source.into_option())
    }

    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    pub fn none() -> Self {
        Optional::None
    }

    pub fn when(condition: bool, value: T) -> Self {
        if condition { Optional::Some(value) } else { Optional::None }
    }

    /// Like [`Optional::when`], but `supplier` only runs when `condition` holds.
    pub fn when_with(condition: bool, supplier: impl FnOnce() -> T) -> Self {
        if condition { Optional::Some(supplier()) } else { Optional::None }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::None)
    }

    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Optional::Some(value) => Self::when(predicate(&value), value),
            Optional::None => Optional::None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Hands the value to `consumer` for side effects and returns `self` untouched.
    pub fn peek(self, consumer: impl FnOnce(&T)) -> Self {
        if let Optional::Some(value) = &self {
            consumer(value);
        }
        self
    }

    pub fn get(&self) -> Result<&T, AccessError> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(AccessError::NoValuePresent),
        }
    }

    pub fn get_or_else(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    pub fn get_or_else_with(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => supplier(),
        }
    }

    pub fn get_or_else_throw<E>(self, fault: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(fault()),
        }
    }

    /// The nullable view: the value, or `None`.
    pub fn into_nullable(self) -> Option<T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    pub fn fold<U>(self, on_none: impl FnOnce() -> U, on_some: impl FnOnce(T) -> U) -> U {
        match self {
            Optional::Some(value) => on_some(value),
            Optional::None => on_none(),
        }
    }

    pub fn or_else(self, alternative: Optional<T>) -> Self {
        match self {
            Optional::Some(_) => self,
            Optional::None => alternative,
        }
    }

    pub fn or_else_with(self, supplier: impl FnOnce() -> Optional<T>) -> Self {
        match self {
            Optional::Some(_) => self,
            Optional::None => supplier(),
        }
    }

    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Optional::Some(value) => Either::Right(value),
            Optional::None => Either::Left(left),
        }
    }

    pub fn to_either_with<L>(self, left: impl FnOnce() -> L) -> Either<L, T> {
        match self {
            Optional::Some(value) => Either::Right(value),
            Optional::None => Either::Left(left()),
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_nullable().into_iter()
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Collects `items` into a `Vec`, or `None` as soon as one item is empty.
    ///
    /// Items after the first empty one are never pulled from the iterator.
    pub fn sequence<I>(items: I) -> Optional<Vec<T>>
    where
        I: IntoIterator<Item = Optional<T>>,
    {
        items.into_iter().collect()
    }

    /// Maps each item through `f` and sequences the results; `f` stops being called at the
    /// first empty result.
    pub fn traverse<A, I, F>(items: I, f: F) -> Optional<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Optional<T>,
    {
        Self::sequence(items.into_iter().map(f))
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_nullable()
    }
}

impl<T, V> FromIterator<Optional<T>> for Optional<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(items: I) -> Self {
        let mut missing = false;
        let collected: V = items
            .into_iter()
            .map_while(|item| match item {
                Optional::Some(value) => Some(value),
                Optional::None => {
                    missing = true;
                    None
                }
            })
            .collect();
        if missing { Optional::None } else { Optional::Some(collected) }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_nullable().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
