/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::collections::HashMap;

use monadic::Case;
use monadic::ContractViolation;
use monadic::Either;
use monadic::Maybe;
use monadic::query;

#[derive(Debug, Clone, PartialEq)]
enum LookupError {
    UnknownUser(u32),
    NoManager(String),
}

struct Directory {
    names: HashMap<u32, String>,
    managers: HashMap<String, u32>,
}

impl Directory {
    fn new() -> Self {
        let names = HashMap::from([
            (1, "ada".to_string()),
            (2, "grace".to_string()),
            (3, "edsger".to_string()),
        ]);
        let managers = HashMap::from([("ada".to_string(), 2), ("grace".to_string(), 9)]);
        Self { names, managers }
    }

    fn name(&self, id: u32) -> Either<LookupError, String> {
        self.names
            .get(&id)
            .cloned()
            .ok_or(LookupError::UnknownUser(id))
            .into()
    }

    fn manager(&self, name: &str) -> Either<LookupError, u32> {
        self.managers
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::NoManager(name.to_string()))
            .into()
    }

    fn nickname(&self, id: u32) -> Maybe<String> {
        Maybe::create(self.names.get(&id).map(|name| name[..1].to_uppercase()))
    }
}

#[test]
fn maybe_query_matches_explicit_binds() {
    let a = Maybe::create(Some(42));
    let b = Maybe::create(Some(true));
    let c = Maybe::create(Some(17.42));

    let sugared = query! {
        from x in a;
        from y in b;
        from z in c;
        select if y { z * f64::from(x) } else { 0.0 }
    };
    let explicit = a.bind(|x| {
        b.bind(|y| c.bind(|z| Maybe::create(Some(if y { z * f64::from(x) } else { 0.0 }))))
    });

    assert_eq!(sugared, explicit);
    assert!((sugared.resolve(0.0, |v| v) - 731.64).abs() < 1e-9);
}

#[test]
fn either_query_threads_first_error() {
    let dir = &Directory::new();

    let chain = |id: u32| {
        query! {
            from name in dir.name(id);
            from manager_id in dir.manager(&name);
            from manager in dir.name(manager_id);
            select format!("{name} reports to {manager}")
        }
    };

    assert_eq!(chain(1), Either::ok("ada reports to grace".to_string()));
    assert_eq!(chain(2), Either::err(LookupError::UnknownUser(9)));
    assert_eq!(
        chain(3),
        Either::err(LookupError::NoManager("edsger".to_string()))
    );
    assert_eq!(chain(4), Either::err(LookupError::UnknownUser(4)));
}

#[test]
fn collapse_unified_pipeline() {
    let dir = Directory::new();
    let describe = |id: u32| {
        dir.name(id)
            .bi_map(|err| format!("error: {err:?}"), |name| format!("user: {name}"))
            .into_inner()
    };
    assert_eq!(describe(1), "user: ada");
    assert_eq!(describe(7), "error: UnknownUser(7)");
}

#[test]
fn nested_maybe_flattens() {
    let dir = Directory::new();
    let nested = Maybe::present(1).map(|id| dir.nickname(id));
    assert_eq!(nested.flatten(), Maybe::present("A".to_string()));

    let nested = Maybe::present(8).map(|id| dir.nickname(id));
    assert_eq!(nested.flatten(), Maybe::empty());
}

#[test]
fn construction_contract_surfaces_as_error() -> anyhow::Result<()> {
    let ok = Either::<String, u32>::try_ok(Some(1))?;
    assert_eq!(ok, Either::ok(1));

    let err = Either::<String, u32>::try_err(None).unwrap_err();
    assert_eq!(err, ContractViolation::MissingPayload { case: Case::Err });

    let propagated: anyhow::Result<Either<String, u32>> =
        Either::try_ok(None).map_err(anyhow::Error::from);
    assert!(
        propagated
            .unwrap_err()
            .to_string()
            .contains("requires a payload")
    );
    Ok(())
}
