/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! An optional value: [`Maybe<T>`].

use serde::Deserialize;
use serde::Serialize;

/// A value of type `T`, or nothing.
///
/// `Maybe` is built from a possibly-absent value with
/// [`Maybe::create`], which normalizes an absent input to
/// [`Maybe::Empty`]. There is no way to observe a "present but
/// missing" state: wrapping nothing and asking for the empty value
/// produce the same thing.
///
/// Values are immutable. [`map`](Maybe::map), [`bind`](Maybe::bind)
/// and friends consume the receiver and hand ownership of the
/// produced value to a new instance.
///
/// # Laws
///
/// Laws (not enforced by type system):
///
/// - **Functor identity**: `m.map(|x| x) == m`
/// - **Functor composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
/// - **Left identity**: `Maybe::present(a).bind(f) == f(a)`
/// - **Right identity**: `m.bind(Maybe::present) == m`
/// - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
///
/// # Equality
///
/// Two `Maybe`s are equal iff both are empty, or both are present and
/// their payloads are equal. Equality is only defined between two
/// `Maybe<T>` of the same `T`; a bare payload never compares equal to
/// a `Maybe`.
///
/// # Example
///
/// ```rust
/// use monadic::Maybe;
///
/// let answer = Maybe::create(Some(42));
/// assert_eq!(answer.map(|x| x + 1).resolve(0, |x| x), 43);
///
/// let nothing: Maybe<i32> = Maybe::create(None);
/// assert_eq!(nothing, Maybe::empty());
/// assert_eq!(nothing.resolve(-1, |x| x), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// A wrapped value.
    Present(T),
    /// No value.
    Empty,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Maybe<T> {
    /// Wrap a possibly-absent value. `None` yields [`Maybe::Empty`].
    pub fn create(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }

    /// Wrap a value that is known to be there.
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty value.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Whether a value is wrapped.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether no value is wrapped.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the wrapped value, if any.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Convert into the standard library's option.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns `on_present(value)` if a value is wrapped, else
    /// `fallback`.
    pub fn resolve<R, F>(self, fallback: R, on_present: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Empty => fallback,
        }
    }

    /// Like [`resolve`](Maybe::resolve), but the fallback is only
    /// computed when the value is empty.
    pub fn resolve_with<R, D, F>(self, on_empty: D, on_present: F) -> R
    where
        D: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Empty => on_empty(),
        }
    }

    /// Run exactly one of the two callbacks for its side effects.
    pub fn perform<D, F>(self, on_empty: D, on_present: F)
    where
        D: FnOnce(),
        F: FnOnce(T),
    {
        self.resolve_with(on_empty, on_present)
    }

    /// Apply `f` to the wrapped value, if any.
    pub fn map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Chain a computation that may itself produce nothing.
    pub fn bind<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    /// The projection step of a comprehension; same as
    /// [`map`](Maybe::map).
    pub fn select<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        self.map(f)
    }

    /// Two chained generators followed by a projection.
    ///
    /// `from x in self; from y in f(x); select combine(x, y)` lowers to
    /// this, and it is equivalent to
    /// `self.bind(|x| f(&x).bind(|y| Maybe::present(combine(x, y))))`.
    ///
    /// ```rust
    /// use monadic::Maybe;
    ///
    /// let name = Maybe::present("ada");
    /// let greeting = name.select_many(|n| Maybe::create(n.chars().next()), |n, c| {
    ///     format!("{n} starts with {c}")
    /// });
    /// assert_eq!(greeting, Maybe::present("ada starts with a".to_string()));
    /// ```
    pub fn select_many<U, V, F, C>(self, f: F, combine: C) -> Maybe<V>
    where
        F: FnOnce(&T) -> Maybe<U>,
        C: FnOnce(T, U) -> V,
    {
        self.bind(|x| f(&x).bind(|y| Maybe::Present(combine(x, y))))
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of nesting. Both `Empty` and `Present(Empty)`
    /// become `Empty`.
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::create(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

/// Collects into a present collection only if every item is present.
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        Self::create(iter.into_iter().map(Maybe::into_option).collect())
    }
}
