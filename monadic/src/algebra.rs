/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Semigroups and monoids, lifted through [`Maybe`] and [`Either`].
//!
//! - [`Maybe<S>`] is a monoid whenever `S` is a semigroup: `Empty` is
//!   the identity, and two present values combine their payloads.
//! - [`Either<E, T>`] is a semigroup whenever `T` is: two successes
//!   combine, and otherwise the leftmost error wins.
//!
//! ```rust
//! use monadic::Maybe;
//! use monadic::algebra::Monoid;
//!
//! let words = vec![
//!     Maybe::present("mon".to_string()),
//!     Maybe::empty(),
//!     Maybe::present("adic".to_string()),
//! ];
//! assert_eq!(Maybe::concat(words), Maybe::present("monadic".to_string()));
//! ```

use crate::Either;
use crate::Maybe;

/// A type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
pub trait Semigroup: Sized {
    /// Combine two elements associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// A semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self);
        out.push_str(other);
        out
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl<S: Semigroup + Clone> Semigroup for Maybe<S> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(a.combine(b)),
            (Maybe::Present(a), Maybe::Empty) => Maybe::Present(a.clone()),
            (Maybe::Empty, other) => other.clone(),
        }
    }
}

impl<S: Semigroup + Clone> Monoid for Maybe<S> {
    fn empty() -> Self {
        Maybe::Empty
    }
}

impl<E: Clone, T: Semigroup + Clone> Semigroup for Either<E, T> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Either::Ok(a), Either::Ok(b)) => Either::Ok(a.combine(b)),
            (Either::Err(e), _) | (Either::Ok(_), Either::Err(e)) => Either::Err(e.clone()),
        }
    }
}
