/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Errors raised when a container is constructed against its contract.

use crate::either::Case;

/// A programmer error detected at construction time.
///
/// These are never produced by the containers' own operations once a
/// value exists; they only surface from the fallible constructors that
/// accept a possibly-absent payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// An `Either` case was requested without a payload to carry.
    #[error("invalid argument: the {case} case of an either requires a payload")]
    MissingPayload {
        /// The case that was being constructed.
        case: Case,
    },
}

impl ContractViolation {
    /// The case whose construction was rejected.
    pub fn case(&self) -> Case {
        match self {
            Self::MissingPayload { case } => *case,
        }
    }
}
