/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Optional and disjoint-union value types with monadic composition.
//!
//! This crate provides two independent containers:
//!
//! - [`Maybe<T>`]: a value of type `T`, or nothing. Wrapping an absent
//!   value and asking for the empty value produce the same state.
//! - [`Either<E, T>`]: exactly one of an error `E` or a success `T`.
//!   Both cases always carry a payload.
//!
//! Both are immutable: `map`, `bind`, `resolve` and the comprehension
//! adapters (`select`, `select_many`) consume the receiver and produce
//! a new value, so fallible or optional steps compose without explicit
//! branching.
//!
//! # Quick Start
//!
//! ```rust
//! use monadic::Either;
//! use monadic::Maybe;
//!
//! let port = Maybe::create(Some("8080"))
//!     .bind(|s| Maybe::create(s.parse::<u16>().ok()))
//!     .resolve(80, |p| p);
//! assert_eq!(port, 8080);
//!
//! let shout = Either::<String, i32>::err("Brrr".to_string())
//!     .map_err(|s| s.to_uppercase())
//!     .resolve(|s| s, |i| i.to_string());
//! assert_eq!(shout, "BRRR");
//! ```
//!
//! # Comprehensions
//!
//! The [`query!`] macro lowers `from .. in ..; select ..` chains to
//! `bind` and `select`:
//!
//! ```rust
//! use monadic::Either;
//! use monadic::query;
//!
//! let total: Either<String, i32> = query! {
//!     from a in Either::ok(40);
//!     from b in Either::ok(2);
//!     select a + b
//! };
//! assert_eq!(total, Either::ok(42));
//! ```
//!
//! # Features
//!
//! - `async` (default): asynchronous bind and comprehension adapters
//!   for [`Either`], see the `future` module.

pub mod algebra;
mod either;
pub mod error;
#[cfg(feature = "async")]
pub mod future;
mod maybe;
mod query;

pub use either::Case;
pub use either::Either;
pub use error::ContractViolation;
#[cfg(feature = "async")]
pub use future::BindAsync;
#[cfg(feature = "async")]
pub use future::EitherFutureExt;
pub use maybe::Maybe;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;
