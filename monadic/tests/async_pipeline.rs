/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![cfg(feature = "async")]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use monadic::Either;
use monadic::EitherFutureExt;

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
        let names = HashMap::from([(1, "ada".to_string()), (3, "edsger".to_string())]);
        let managers = HashMap::from([("ada".to_string(), 2)]);
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
}

#[tokio::test]
async fn async_pipeline_never_runs_after_error() {
    let dir = Arc::new(Directory::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let fetch = {
        let dir = dir.clone();
        let calls = calls.clone();
        move |name: String| {
            let dir = dir.clone();
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                dir.manager(&name)
            }
        }
    };

    let found = dir.name(1).bind_async(fetch.clone()).await;
    assert_eq!(found, Either::ok(2));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let missing = dir.name(5).bind_async(fetch.clone()).await;
    assert_eq!(missing, Either::err(LookupError::UnknownUser(5)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let no_manager = dir.name(3).bind_async(fetch.clone()).await;
    assert_eq!(
        no_manager,
        Either::err(LookupError::NoManager("edsger".to_string()))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let chained = futures::future::ready(dir.name(1))
        .bind_ok(fetch)
        .map_ok(|manager_id| manager_id * 10)
        .await;
    assert_eq!(chained, Either::ok(20));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
