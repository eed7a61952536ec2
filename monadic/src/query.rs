/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Query-comprehension syntax.

/// Comprehension syntax over any container exposing `bind` and
/// `select` ([`Maybe`](crate::Maybe) and [`Either`](crate::Either)).
///
/// A query is one or more `from PAT in EXPR;` generators, each
/// optionally followed by `let PAT = EXPR;` bindings, and ends with
/// `select EXPR`. Every generator except the last lowers to `bind`;
/// the last one lowers to `select`:
///
/// ```text
/// query! { from x in a; from y in b(x); let s = x + y; select s * 2 }
///
/// a.bind(move |x| { b(x).select(move |y| { let s = x + y; s * 2 }) })
/// ```
///
/// Closures are `move`, so later clauses may use any earlier binding.
///
/// A generator may be followed directly by `where EXPR;` clauses,
/// which lower to `filter` on that generator's source. The condition
/// sees the generator's binding by reference. `filter` is only defined
/// on [`Maybe`](crate::Maybe), so `where` is only available there.
///
/// ```text
/// query! { from x in a; where *x > 0; select x }
///
/// a.filter(|x| *x > 0).select(move |x| { x })
/// ```
///
/// # Example
///
/// ```rust
/// use monadic::Maybe;
/// use monadic::query;
///
/// let a = Maybe::present(42);
/// let b = Maybe::present(true);
/// let c = Maybe::present(17.42);
///
/// let product = query! {
///     from x in a;
///     from y in b;
///     from z in c;
///     select if y { z * f64::from(x) } else { 0.0 }
/// };
/// assert!((product.resolve(0.0, |v| v) - 731.64).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! query {
    (
        from $x:pat in $src:expr ;
        where $cond:expr ;
        $($rest:tt)+
    ) => {
        $crate::query!(from $x in ($src).filter(|$x| $cond) ; $($rest)+)
    };
    (
        from $x:pat in $src:expr ;
        $(let $y:pat = $e:expr ;)*
        select $body:expr $(;)?
    ) => {
        ($src).select(move |$x| {
            $(let $y = $e;)*
            $body
        })
    };
    (
        from $x:pat in $src:expr ;
        $(let $y:pat = $e:expr ;)*
        from $($rest:tt)+
    ) => {
        ($src).bind(move |$x| {
            $(let $y = $e;)*
            $crate::query!(from $($rest)+)
        })
    };
}
