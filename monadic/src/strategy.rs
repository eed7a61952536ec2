/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for [`Maybe`] and [`Either`].
//!
//! Both generators draw each case with roughly equal weight so that
//! law tests see the empty/error paths as often as the value paths.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::Either;
use crate::Maybe;

/// Generates a [`Maybe`] through [`Maybe::create`], so empty values
/// come from the same normalization path user code takes.
pub fn gen_maybe<T>() -> impl Strategy<Value = Maybe<T>>
where
    T: Arbitrary,
{
    proptest::option::weighted(0.5, any::<T>()).prop_map(Maybe::create)
}

/// Generates an [`Either`] in either case.
pub fn gen_either<E, T>() -> impl Strategy<Value = Either<E, T>>
where
    E: Arbitrary,
    T: Arbitrary,
{
    prop_oneof![
        any::<E>().prop_map(Either::<E, T>::err),
        any::<T>().prop_map(Either::<E, T>::ok),
    ]
}
