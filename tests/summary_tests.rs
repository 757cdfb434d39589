// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::models::RawRow;
use tallybook::summary::{
    category_month_heatmap, daily_summary, filter_by_date, monthly_summary, observed_range,
};

fn row(date: &str, kind: &str, category: &str, amount: &str) -> RawRow {
    RawRow {
        date: date.into(),
        kind: kind.into(),
        category: category.into(),
        amount: amount.into(),
        account: "Checking".into(),
        note: String::new(),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn filter_is_inclusive_on_both_bounds() {
    let rows = vec![
        row("2025-01-01", "Expense", "Food", "10"),
        row("2025-01-02", "Expense", "Food", "20"),
        row("2025-01-03", "Expense", "Food", "30"),
        row("2025-01-04", "Expense", "Food", "40"),
    ];
    let filtered = filter_by_date(&rows, date("2025-01-02"), date("2025-01-03"));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].date, date("2025-01-02"));
    assert_eq!(filtered[1].date, date("2025-01-03"));
}

#[test]
fn unparseable_dates_are_dropped_silently() {
    let rows = vec![
        row("2025-01-01", "Expense", "Food", "10"),
        row("not-a-date", "Expense", "Food", "999"),
        row("", "Income", "Salary", "999"),
    ];
    let filtered = filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].amount, Decimal::from(10));
}

#[test]
fn unknown_type_rows_are_dropped() {
    let rows = vec![
        row("2025-01-01", "Expense", "Food", "10"),
        row("2025-01-01", "Transfer", "Food", "999"),
        row("2025-01-01", "", "Food", "999"),
    ];
    let filtered = filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX);
    assert_eq!(filtered.len(), 1);
    let daily = daily_summary(&filtered);
    assert_eq!(daily[0].expense, Decimal::from(10));
}

#[test]
fn unparseable_amount_coerces_to_zero() {
    let rows = vec![row("2025-01-01", "Expense", "Food", "abc")];
    let filtered = filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].amount, Decimal::ZERO);
}

#[test]
fn daily_summary_pivots_both_kinds_on_one_date() {
    let rows = vec![
        row("2025-01-10", "Expense", "Food", "50"),
        row("2025-01-10", "Income", "Salary", "100"),
    ];
    let filtered = filter_by_date(&rows, date("2025-01-10"), date("2025-01-10"));
    let daily = daily_summary(&filtered);
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].date, date("2025-01-10"));
    assert_eq!(daily[0].expense, Decimal::from(50));
    assert_eq!(daily[0].income, Decimal::from(100));
}

#[test]
fn daily_summary_orders_dates_ascending_and_zero_fills() {
    let rows = vec![
        row("2025-01-12", "Income", "Salary", "500"),
        row("2025-01-10", "Expense", "Food", "25"),
    ];
    let daily = daily_summary(&filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX));
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, date("2025-01-10"));
    assert_eq!(daily[0].income, Decimal::ZERO);
    assert_eq!(daily[1].date, date("2025-01-12"));
    assert_eq!(daily[1].expense, Decimal::ZERO);
}

#[test]
fn monthly_summary_groups_by_month_label() {
    let rows = vec![
        row("2025-01-05", "Expense", "Food", "100"),
        row("2025-01-20", "Expense", "Bills", "40"),
        row("2025-02-03", "Income", "Salary", "900"),
    ];
    let monthly = monthly_summary(&filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX));
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "Jan 2025");
    assert_eq!(monthly[0].expense, Decimal::from(140));
    assert_eq!(monthly[0].income, Decimal::ZERO);
    assert_eq!(monthly[1].month, "Feb 2025");
    assert_eq!(monthly[1].income, Decimal::from(900));
}

#[test]
fn empty_input_yields_empty_summaries() {
    let filtered = filter_by_date(&[], NaiveDate::MIN, NaiveDate::MAX);
    assert!(daily_summary(&filtered).is_empty());
    assert!(monthly_summary(&filtered).is_empty());
    assert!(category_month_heatmap(&filtered).is_empty());
}

#[test]
fn heatmap_sums_expense_per_category_and_month() {
    let rows = vec![
        row("2025-01-05", "Expense", "Food", "100"),
        row("2025-01-22", "Expense", "Food", "200"),
        row("2025-02-10", "Expense", "Food", "150"),
    ];
    let map = category_month_heatmap(&filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX));
    assert_eq!(map.months, vec!["Jan 2025", "Feb 2025"]);
    assert_eq!(map.rows.len(), 1);
    assert_eq!(map.rows[0].category, "Food");
    assert_eq!(
        map.rows[0].cells,
        vec![Decimal::from(300), Decimal::from(150)]
    );
}

#[test]
fn heatmap_ignores_income_and_zero_fills_gaps() {
    let rows = vec![
        row("2025-01-05", "Expense", "Food", "100"),
        row("2025-02-01", "Expense", "Transport", "30"),
        row("2025-02-15", "Income", "Salary", "5000"),
    ];
    let map = category_month_heatmap(&filter_by_date(&rows, NaiveDate::MIN, NaiveDate::MAX));
    assert_eq!(map.months, vec!["Jan 2025", "Feb 2025"]);
    assert_eq!(map.rows.len(), 2);
    // Alphabetical category rows.
    assert_eq!(map.rows[0].category, "Food");
    assert_eq!(map.rows[0].cells, vec![Decimal::from(100), Decimal::ZERO]);
    assert_eq!(map.rows[1].category, "Transport");
    assert_eq!(map.rows[1].cells, vec![Decimal::ZERO, Decimal::from(30)]);
}

#[test]
fn observed_range_spans_parseable_rows_only() {
    let rows = vec![
        row("junk", "Expense", "Food", "1"),
        row("2025-03-05", "Expense", "Food", "1"),
        row("2025-01-17", "Income", "Salary", "1"),
    ];
    let (lo, hi) = observed_range(&rows).unwrap();
    assert_eq!(lo, date("2025-01-17"));
    assert_eq!(hi, date("2025-03-05"));
    assert!(observed_range(&[]).is_none());
}
