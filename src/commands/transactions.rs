// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::post::post_transaction;
use crate::store::{AccountStore, CategoryStore};
use crate::summary::filter_by_date;
use crate::utils::{maybe_print_json, parse_amount, parse_date, parse_kind, pretty_table};
use anyhow::Result;
use log::warn;
use serde::Serialize;

pub fn handle(
    accounts: &mut AccountStore,
    categories: &CategoryStore,
    ledger: &mut dyn Ledger,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(accounts, categories, ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(
    accounts: &mut AccountStore,
    categories: &CategoryStore,
    ledger: &mut dyn Ledger,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let account = sub.get_one::<String>("account").unwrap().to_string();
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    if accounts.is_empty() {
        anyhow::bail!("No accounts yet. Add an account first");
    }
    // The category list only steers entry; free text is accepted as-is.
    if !categories.categories_for(kind).contains(&category) {
        warn!("category '{}' is not in the {} list", category, kind);
    }

    let tx = Transaction {
        date,
        kind,
        category,
        amount,
        account,
        note,
    };
    post_transaction(accounts, ledger, &tx)?;
    let balance = accounts
        .get(&tx.account)
        .map(|a| format!(", balance now {}", a.current_balance))
        .unwrap_or_default();
    println!(
        "Recorded {} {} '{}' against '{}' on {}{}",
        tx.kind, tx.amount, tx.category, tx.account, tx.date, balance
    );
    Ok(())
}

fn list(ledger: &dyn Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.account.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Amount", "Account", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub account: String,
    pub note: String,
}

/// Date-filtered ledger rows, newest first, optionally limited. The full
/// ledger is re-read on every call; it is the source of truth.
pub fn query_rows(ledger: &dyn Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let raw = ledger.read_all()?;
    let (start, end) = super::resolve_range(sub, &raw)?;
    let mut filtered = filter_by_date(&raw, start, end);
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        filtered.truncate(*limit);
    }
    Ok(filtered
        .iter()
        .map(|tx| TransactionRow {
            date: tx.date.to_string(),
            kind: tx.kind.to_string(),
            category: tx.category.clone(),
            amount: tx.amount.to_string(),
            account: tx.account.clone(),
            note: tx.note.clone().unwrap_or_default(),
        })
        .collect())
}
