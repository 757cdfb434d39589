// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod categories;
pub mod exporter;
pub mod reports;
pub mod transactions;

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::RawRow;
use crate::summary::observed_range;
use crate::utils::parse_date;

/// Resolve the [start, end] filter range from `--from`/`--to`, defaulting
/// each missing bound to the earliest/latest date observed in the ledger.
pub fn resolve_range(sub: &clap::ArgMatches, rows: &[RawRow]) -> Result<(NaiveDate, NaiveDate)> {
    let observed = observed_range(rows);
    let start = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => observed.map(|(lo, _)| lo).unwrap_or(NaiveDate::MIN),
    };
    let end = match sub.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => observed.map(|(_, hi)| hi).unwrap_or(NaiveDate::MAX),
    };
    Ok((start, end))
}
