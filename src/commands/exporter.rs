// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{LEDGER_HEADERS, Ledger};
use crate::models::RawRow;
use crate::summary::filter_by_date;
use crate::utils::export_filename;
use anyhow::Result;

pub fn handle(ledger: &dyn Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ledger: &dyn Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => export_filename(chrono::Local::now().date_naive()),
    };

    let raw = ledger.read_all()?;
    let (start, end) = super::resolve_range(sub, &raw)?;
    let filtered = filter_by_date(&raw, start, end);
    if filtered.is_empty() {
        println!("No transactions available to export.");
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(&out)?;
    wtr.write_record(LEDGER_HEADERS)?;
    for tx in &filtered {
        wtr.serialize(RawRow::from(tx))?;
    }
    wtr.flush()?;
    println!("Exported {} transactions to {}", filtered.len(), out);
    Ok(())
}
