// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{RawRow, Transaction, TxKind};
use crate::utils::month_label;

/// Inclusive date-range filter over raw ledger rows. Rows whose date or
/// type fail to parse are dropped silently, mirroring how the dashboard
/// coerces bad rows to missing and moves on.
pub fn filter_by_date(rows: &[RawRow], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    rows.iter()
        .filter_map(RawRow::parse)
        .filter(|tx| tx.date >= start && tx.date <= end)
        .collect()
}

/// Earliest and latest parseable dates in the rows, the default filter
/// range when the caller gives no bounds.
pub fn observed_range(rows: &[RawRow]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = rows.iter().filter_map(RawRow::parse).map(|tx| tx.date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub expense: Decimal,
    pub income: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRow {
    pub month: String,
    pub expense: Decimal,
    pub income: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapRow {
    pub category: String,
    pub cells: Vec<Decimal>,
}

/// Category-by-month matrix of summed expense amounts. Rows are the
/// categories observed in the filtered set, columns the observed months;
/// absent combinations are zero-filled.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Heatmap {
    pub months: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Per-date Expense and Income sums, one row per observed date, ascending.
pub fn daily_summary(filtered: &[Transaction]) -> Vec<DailyRow> {
    let mut by_date: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for tx in filtered {
        let entry = by_date.entry(tx.date).or_default();
        match tx.kind {
            TxKind::Expense => entry.0 += tx.amount,
            TxKind::Income => entry.1 += tx.amount,
        }
    }
    by_date
        .into_iter()
        .map(|(date, (expense, income))| DailyRow {
            date,
            expense,
            income,
        })
        .collect()
}

/// Per-month Expense and Income sums, labelled "Mon YYYY", chronological.
/// The label is a plain truncation of the date, not a fiscal period.
pub fn monthly_summary(filtered: &[Transaction]) -> Vec<MonthlyRow> {
    let mut by_month: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    let mut labels: BTreeMap<(i32, u32), String> = BTreeMap::new();
    for tx in filtered {
        let key = (tx.date.year(), tx.date.month());
        labels.entry(key).or_insert_with(|| month_label(tx.date));
        let entry = by_month.entry(key).or_default();
        match tx.kind {
            TxKind::Expense => entry.0 += tx.amount,
            TxKind::Income => entry.1 += tx.amount,
        }
    }
    by_month
        .into_iter()
        .map(|(key, (expense, income))| MonthlyRow {
            month: labels[&key].clone(),
            expense,
            income,
        })
        .collect()
}

/// Expense-only pivot of category sums with months as columns.
pub fn category_month_heatmap(filtered: &[Transaction]) -> Heatmap {
    let mut months: BTreeMap<(i32, u32), String> = BTreeMap::new();
    let mut cells: BTreeMap<(String, (i32, u32)), Decimal> = BTreeMap::new();
    for tx in filtered.iter().filter(|tx| tx.kind == TxKind::Expense) {
        let key = (tx.date.year(), tx.date.month());
        months.entry(key).or_insert_with(|| month_label(tx.date));
        *cells.entry((tx.category.clone(), key)).or_default() += tx.amount;
    }
    if cells.is_empty() {
        return Heatmap::default();
    }

    let month_keys: Vec<(i32, u32)> = months.keys().copied().collect();
    let mut categories: Vec<String> = cells.keys().map(|(cat, _)| cat.clone()).collect();
    categories.sort();
    categories.dedup();

    let rows = categories
        .into_iter()
        .map(|category| {
            let row_cells = month_keys
                .iter()
                .map(|key| {
                    cells
                        .get(&(category.clone(), *key))
                        .copied()
                        .unwrap_or(Decimal::ZERO)
                })
                .collect();
            HeatmapRow {
                category,
                cells: row_cells,
            }
        })
        .collect();

    Heatmap {
        months: months.into_values().collect(),
        rows,
    }
}
