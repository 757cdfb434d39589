// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;
use crate::store::CategoryStore;
use crate::utils::{parse_kind, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut CategoryStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
            let name = sub.get_one::<String>("name").unwrap();
            store.add(kind, name)?;
            println!("Added {} category '{}'", kind, name);
        }
        Some(("list", sub)) => {
            let kinds: Vec<TxKind> = match sub.get_one::<String>("type") {
                Some(s) => vec![parse_kind(s)?],
                None => vec![TxKind::Expense, TxKind::Income],
            };
            let mut data = Vec::new();
            for kind in kinds {
                for name in store.categories_for(kind) {
                    data.push(vec![kind.to_string(), name]);
                }
            }
            println!("{}", pretty_table(&["Type", "Category"], data));
        }
        _ => {}
    }
    Ok(())
}
