// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use env_logger::Env;
use std::path::PathBuf;

use tallybook::ledger::CsvLedger;
use tallybook::store::{ACCOUNTS_FILE, AccountStore, CATEGORIES_FILE, CategoryStore, LEDGER_FILE};
use tallybook::{cli, commands, store};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = cli::build_cli().get_matches();

    let dir = match matches.get_one::<String>("data-dir") {
        Some(p) => {
            let dir = PathBuf::from(p);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
            dir
        }
        None => store::data_dir()?,
    };

    // All three stores must be reachable before any command runs; an
    // unavailable store halts the session here.
    let mut accounts = AccountStore::open(dir.join(ACCOUNTS_FILE))?;
    let mut categories = CategoryStore::open(dir.join(CATEGORIES_FILE))?;
    let mut ledger = CsvLedger::open(dir.join(LEDGER_FILE))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Tracker data initialized at {}", dir.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&mut accounts, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut categories, sub)?,
        Some(("tx", sub)) => {
            commands::transactions::handle(&mut accounts, &categories, &mut ledger, sub)?
        }
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
