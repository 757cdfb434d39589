// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::AccountStore;
use crate::utils::{fmt_money, parse_amount, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut AccountStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let opening = parse_amount(sub.get_one::<String>("opening").unwrap())?;
            store.add(name, opening)?;
            println!("Added account '{}' with opening balance {}", name, opening);
        }
        Some(("list", _)) => {
            let data: Vec<Vec<String>> = store
                .accounts()
                .iter()
                .map(|a| {
                    vec![
                        a.name.clone(),
                        fmt_money(&a.opening_balance),
                        fmt_money(&a.current_balance),
                    ]
                })
                .collect();
            if data.is_empty() {
                println!("No accounts found. Add your first account!");
            } else {
                println!(
                    "{}",
                    pretty_table(&["Account", "Opening Balance", "Current Balance"], data)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
