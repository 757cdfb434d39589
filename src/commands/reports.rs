// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::summary::{category_month_heatmap, daily_summary, filter_by_date, monthly_summary};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &dyn Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("daily", sub)) => daily(ledger, sub)?,
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        Some(("heatmap", sub)) => heatmap(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn daily(ledger: &dyn Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let raw = ledger.read_all()?;
    let (start, end) = super::resolve_range(sub, &raw)?;
    let rows = daily_summary(&filter_by_date(&raw, start, end));
    if rows.is_empty() {
        println!("No transactions in range; nothing to display.");
        return Ok(());
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    fmt_money(&r.expense),
                    fmt_money(&r.income),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Expense", "Income"], data));
    }
    Ok(())
}

fn monthly(ledger: &dyn Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let raw = ledger.read_all()?;
    let (start, end) = super::resolve_range(sub, &raw)?;
    let rows = monthly_summary(&filter_by_date(&raw, start, end));
    if rows.is_empty() {
        println!("No transactions in range; nothing to display.");
        return Ok(());
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| vec![r.month.clone(), fmt_money(&r.expense), fmt_money(&r.income)])
            .collect();
        println!("{}", pretty_table(&["Month", "Expense", "Income"], data));
    }
    Ok(())
}

fn heatmap(ledger: &dyn Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let raw = ledger.read_all()?;
    let (start, end) = super::resolve_range(sub, &raw)?;
    let map = category_month_heatmap(&filter_by_date(&raw, start, end));
    if map.is_empty() {
        println!("No expense data in range; nothing to display.");
        return Ok(());
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &map)? {
        let mut headers = vec!["Category"];
        headers.extend(map.months.iter().map(|m| m.as_str()));
        let data = map
            .rows
            .iter()
            .map(|r| {
                let mut row = vec![r.category.clone()];
                row.extend(r.cells.iter().map(fmt_money));
                row
            })
            .collect();
        println!("{}", pretty_table(&headers, data));
    }
    Ok(())
}
