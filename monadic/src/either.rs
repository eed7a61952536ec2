/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A disjoint union of an error and a success: [`Either<E, T>`].

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ContractViolation;

/// Exactly one of an error value `E` or a success value `T`.
///
/// The case is fixed when the value is built and never changes;
/// transformations consume the receiver and produce a new `Either`.
/// Unlike [`Maybe`](crate::Maybe), there is no empty state: both
/// cases carry a real payload, and the fallible constructors
/// [`try_err`](Either::try_err) and [`try_ok`](Either::try_ok) reject
/// a missing one instead of normalizing it away.
///
/// The error type stays fixed across a [`bind`](Either::bind) chain,
/// so the first error in a pipeline reaches the end untouched.
///
/// # Laws
///
/// Laws (not enforced by type system):
///
/// - **Left identity**: `Either::ok(a).bind(f) == f(a)`
/// - **Right identity**: `m.bind(Either::ok) == m`
/// - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
/// - **Bi-map**: `m.bi_map(f, g) == m.map_err(f).map_ok(g) ==
///   m.map_ok(g).map_err(f)`
///
/// # Example
///
/// ```rust
/// use monadic::Either;
///
/// let parsed: Either<String, i32> = Either::ok(42);
/// let doubled = parsed
///     .bind(|n| if n < 1800 { Either::ok(n * 2) } else { Either::err("too big".to_string()) })
///     .resolve(|_| 0, |n| n);
/// assert_eq!(doubled, 84);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<E, T> {
    /// The error case.
    Err(E),
    /// The success case.
    Ok(T),
}

/// The discriminant of an [`Either`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    /// [`Either::Err`].
    Err,
    /// [`Either::Ok`].
    Ok,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Err => write!(f, "error"),
            Case::Ok => write!(f, "ok"),
        }
    }
}

impl<E, T> Either<E, T> {
    /// Build the error case.
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Build the success case.
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Build the error case from a possibly-absent payload.
    ///
    /// ```rust
    /// use monadic::Case;
    /// use monadic::Either;
    ///
    /// let err = Either::<String, i32>::try_err(None).unwrap_err();
    /// assert_eq!(err.case(), Case::Err);
    /// ```
    pub fn try_err(error: Option<E>) -> Result<Self, ContractViolation> {
        match error {
            Some(error) => Ok(Self::Err(error)),
            None => Err(missing_payload(Case::Err)),
        }
    }

    /// Build the success case from a possibly-absent payload.
    pub fn try_ok(value: Option<T>) -> Result<Self, ContractViolation> {
        match value {
            Some(value) => Ok(Self::Ok(value)),
            None => Err(missing_payload(Case::Ok)),
        }
    }

    /// Which case is active.
    pub fn case(&self) -> Case {
        match self {
            Self::Err(_) => Case::Err,
            Self::Ok(_) => Case::Ok,
        }
    }

    /// Whether this is the success case.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Whether this is the error case.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// The success payload, if that case is active.
    pub fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The error payload, if that case is active.
    pub fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Err(error) => Some(error),
            Self::Ok(_) => None,
        }
    }

    /// Borrow both payload types.
    pub fn as_ref(&self) -> Either<&E, &T> {
        match self {
            Self::Err(error) => Either::Err(error),
            Self::Ok(value) => Either::Ok(value),
        }
    }

    /// Convert into the standard library's result.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Err(error) => Err(error),
            Self::Ok(value) => Ok(value),
        }
    }

    /// Invoke exactly one branch, according to the active case.
    ///
    /// With `R = ()` this is the side-effecting form.
    pub fn resolve<R, FE, FT>(self, on_err: FE, on_ok: FT) -> R
    where
        FE: FnOnce(E) -> R,
        FT: FnOnce(T) -> R,
    {
        match self {
            Self::Err(error) => on_err(error),
            Self::Ok(value) => on_ok(value),
        }
    }

    /// Transform the success payload; errors pass through.
    pub fn map_ok<R, F>(self, f: F) -> Either<E, R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Err(error) => Either::Err(error),
            Self::Ok(value) => Either::Ok(f(value)),
        }
    }

    /// Transform the error payload; successes pass through.
    pub fn map_err<F, G>(self, f: G) -> Either<F, T>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Err(error) => Either::Err(f(error)),
            Self::Ok(value) => Either::Ok(value),
        }
    }

    /// Transform whichever payload is active.
    pub fn bi_map<F, R, GE, GT>(self, on_err: GE, on_ok: GT) -> Either<F, R>
    where
        GE: FnOnce(E) -> F,
        GT: FnOnce(T) -> R,
    {
        match self {
            Self::Err(error) => Either::Err(on_err(error)),
            Self::Ok(value) => Either::Ok(on_ok(value)),
        }
    }

    /// Chain a fallible computation. An error is propagated unchanged
    /// and `f` is not called.
    pub fn bind<R, F>(self, f: F) -> Either<E, R>
    where
        F: FnOnce(T) -> Either<E, R>,
    {
        match self {
            Self::Err(error) => Either::Err(error),
            Self::Ok(value) => f(value),
        }
    }

    /// The projection step of a comprehension; same as
    /// [`map_ok`](Either::map_ok).
    pub fn select<R, F>(self, f: F) -> Either<E, R>
    where
        F: FnOnce(T) -> R,
    {
        self.map_ok(f)
    }

    /// Two chained generators followed by a projection:
    /// `self.bind(|x| f(&x).map_ok(|y| combine(x, y)))`.
    pub fn select_many<U, V, F, C>(self, f: F, combine: C) -> Either<E, V>
    where
        F: FnOnce(&T) -> Either<E, U>,
        C: FnOnce(T, U) -> V,
    {
        self.bind(|x| f(&x).map_ok(|y| combine(x, y)))
    }
}

impl<T> Either<T, T> {
    /// Return whichever payload is active, once the error and success
    /// types have been unified.
    pub fn into_inner(self) -> T {
        match self {
            Self::Err(value) | Self::Ok(value) => value,
        }
    }
}

fn missing_payload(case: Case) -> ContractViolation {
    tracing::debug!(%case, "rejected either construction without a payload");
    ContractViolation::MissingPayload { case }
}

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, T> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.into_result()
    }
}

/// Collects every success, or stops at the first error.
impl<E, A, V> FromIterator<Either<E, A>> for Either<E, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Either<E, A>>,
    {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
