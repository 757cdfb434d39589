// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::{error, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::store::AccountStore;

/// Post one transaction: mutate the owning account's balance in memory,
/// persist the account set, then append to the ledger. No atomic
/// transaction spans the two stores, so the order is deliberate: a ledger
/// failure leaves the persisted balance ahead of the ledger, and the
/// error names the step so the stores can be reconciled by hand.
pub fn post_transaction(
    accounts: &mut AccountStore,
    ledger: &mut dyn Ledger,
    tx: &Transaction,
) -> TrackerResult<()> {
    let delta = tx.signed_amount();
    if !accounts.apply_delta(&tx.account, delta) {
        // Known gap: the row still goes to the ledger, no balance moves.
        warn!(
            "account '{}' not found; ledger row will be appended without a balance update",
            tx.account
        );
    }

    if let Err(e) = accounts.save() {
        error!("post failed persisting accounts: {}", e);
        return Err(TrackerError::PostFailure {
            step: "accounts",
            reason: e.to_string(),
        });
    }

    if let Err(e) = ledger.append_row(tx) {
        error!(
            "post failed appending to ledger; balance for '{}' already persisted: {}",
            tx.account, e
        );
        return Err(TrackerError::PostFailure {
            step: "ledger",
            reason: e.to_string(),
        });
    }

    info!(
        "posted {} {} '{}' against '{}' on {}",
        tx.kind, tx.amount, tx.category, tx.account, tx.date
    );
    Ok(())
}
