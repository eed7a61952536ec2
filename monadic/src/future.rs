/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Asynchronous adapters over [`Either`].
//!
//! These are thin wrappers around the synchronous
//! [`bind`](Either::bind)/[`map_ok`](Either::map_ok) contract. The
//! executor is consumed opaquely: all that is needed is an
//! already-resolved future ([`future::ready`]), awaiting a future, and
//! chaining a continuation after it ([`FutureExt::map`]).
//!
//! An error-state receiver never calls (or schedules) the callback; the
//! returned future resolves on its first poll with the original error.
//!
//! ```rust
//! use monadic::Either;
//!
//! # futures::executor::block_on(async {
//! let doubled = Either::<String, i32>::ok(21)
//!     .bind_async(|x| async move { Either::ok(x * 2) })
//!     .await;
//! assert_eq!(doubled, Either::ok(42));
//! # });
//! ```

use std::future::Future;

use futures::FutureExt;
use futures::future;

use crate::Either;

/// The future returned by [`Either::bind_async`]: either an
/// already-resolved error, or the future produced by the callback.
pub type BindAsync<E, R, Fut> = future::Either<future::Ready<Either<E, R>>, Fut>;

impl<E, T> Either<E, T> {
    /// Chain an asynchronous fallible computation.
    ///
    /// On the error case `f` is not invoked and the error is returned
    /// in an already-resolved future.
    pub fn bind_async<R, F, Fut>(self, f: F) -> BindAsync<E, R, Fut>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Either<E, R>>,
    {
        match self {
            Self::Err(error) => {
                tracing::trace!("either is in the error case; async bind short-circuited");
                future::Either::Left(future::ready(Either::Err(error)))
            }
            Self::Ok(value) => future::Either::Right(f(value)),
        }
    }

    /// Asynchronous [`select`](Either::select): await `f(value)` and
    /// wrap its output in the success case.
    pub fn select_async<R, F, Fut>(self, f: F) -> impl Future<Output = Either<E, R>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        self.bind_async(|value| f(value).map(Either::Ok))
    }

    /// Asynchronous [`select_many`](Either::select_many): bind to the
    /// future produced by `f`, then project both values with `combine`
    /// once it resolves.
    pub fn select_many_async<U, V, F, Fut, C>(
        self,
        f: F,
        combine: C,
    ) -> impl Future<Output = Either<E, V>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Either<E, U>>,
        C: FnOnce(T, U) -> V,
    {
        self.bind_async(|x| {
            let pending = f(&x);
            pending.map(|either| either.map_ok(|y| combine(x, y)))
        })
    }
}

/// Continuations on a pending [`Either`], so that asynchronous
/// pipelines can be chained before anything is awaited.
pub trait EitherFutureExt<E, T>: Future<Output = Either<E, T>> + Sized {
    /// Once resolved, [`bind_async`](Either::bind_async) into `f`.
    fn bind_ok<R, F, Fut>(self, f: F) -> impl Future<Output = Either<E, R>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Either<E, R>>,
    {
        self.then(|either| either.bind_async(f))
    }

    /// Once resolved, [`map_ok`](Either::map_ok) with `f`.
    fn map_ok<R, F>(self, f: F) -> impl Future<Output = Either<E, R>>
    where
        F: FnOnce(T) -> R,
    {
        self.map(|either| either.map_ok(f))
    }
}

impl<E, T, Fut> EitherFutureExt<E, T> for Fut where Fut: Future<Output = Either<E, T>> {}
