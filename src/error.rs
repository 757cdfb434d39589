// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Error taxonomy for the tracker core.
///
/// `Validation` and the silent missing-account no-op are recoverable and
/// reported inline; `StoreUnavailable` at startup is fatal. `PostFailure`
/// names which step of the two-step post went wrong so the stores can be
/// reconciled by hand — nothing is retried automatically.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("{what} unavailable: {reason}")]
    StoreUnavailable { what: &'static str, reason: String },

    #[error("transaction post failed at the {step} step: {reason}")]
    PostFailure { step: &'static str, reason: String },
}

impl TrackerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_step() {
        let err = TrackerError::PostFailure {
            step: "ledger",
            reason: "disk full".into(),
        };
        assert_eq!(
            err.to_string(),
            "transaction post failed at the ledger step: disk full"
        );
    }

    #[test]
    fn validation_predicate() {
        assert!(TrackerError::Validation("empty name".into()).is_validation());
    }
}
