// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::ledger::{CsvLedger, Ledger};
use tallybook::models::{Transaction, TxKind};
use tallybook::utils::export_filename;
use tallybook::{cli, commands::exporter};
use tempfile::TempDir;

#[test]
fn export_writes_filtered_rows_with_headers() {
    let tmp = TempDir::new().unwrap();
    let mut ledger = CsvLedger::open(tmp.path().join("ledger.csv")).unwrap();
    for (day, amount) in [(5, 120), (25, 80)] {
        ledger
            .append_row(&Transaction {
                date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                kind: TxKind::Expense,
                category: "Bills".into(),
                amount: Decimal::from(amount),
                account: "Checking".into(),
                note: Some("utility".into()),
            })
            .unwrap();
    }

    let out = tmp.path().join("out.csv");
    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "export",
        "transactions",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-10",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&ledger, sub).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Type,Category,Amount,Account,Notes"
    );
    assert_eq!(
        lines.next().unwrap(),
        "2025-06-05,Expense,Bills,120,Checking,utility"
    );
    assert!(lines.next().is_none(), "out-of-range row must be excluded");
}

#[test]
fn export_of_empty_range_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let ledger = CsvLedger::open(tmp.path().join("ledger.csv")).unwrap();

    let out = tmp.path().join("out.csv");
    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "export",
        "transactions",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&ledger, sub).unwrap();
    assert!(!out.exists(), "no file for an empty export");
}

#[test]
fn default_filename_uses_current_date_pattern() {
    let name = export_filename(NaiveDate::from_ymd_opt(2025, 8, 24).unwrap());
    assert_eq!(name, "transactions_2025-08-24.csv");
}
