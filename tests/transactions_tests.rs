// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::ledger::{CsvLedger, Ledger};
use tallybook::models::{Transaction, TxKind};
use tallybook::{cli, commands::transactions};
use tempfile::TempDir;

fn setup(tmp: &TempDir) -> CsvLedger {
    let mut ledger = CsvLedger::open(tmp.path().join("ledger.csv")).unwrap();
    for day in 1..=3 {
        ledger
            .append_row(&Transaction {
                date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                kind: TxKind::Expense,
                category: "Food".into(),
                amount: Decimal::from(10),
                account: "Checking".into(),
                note: None,
            })
            .unwrap();
    }
    ledger
}

#[test]
fn list_limit_respected() {
    let tmp = TempDir::new().unwrap();
    let ledger = setup(&tmp);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tallybook", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-01-03");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_honors_date_range() {
    let tmp = TempDir::new().unwrap();
    let ledger = setup(&tmp);
    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "tx",
        "list",
        "--from",
        "2025-01-02",
        "--to",
        "2025-01-02",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&ledger, list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2025-01-02");
    assert_eq!(rows[0].kind, "Expense");
    assert_eq!(rows[0].account, "Checking");
}
