// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, Category, TxKind};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.tallybook", "Tallybook", "tallybook"));

pub const ACCOUNTS_FILE: &str = "accounts.csv";
pub const CATEGORIES_FILE: &str = "categories.csv";
pub const LEDGER_FILE: &str = "ledger.csv";

const ACCOUNT_HEADERS: [&str; 3] = ["Account Name", "Opening Balance", "Current Balance"];
const CATEGORY_HEADERS: [&str; 2] = ["Category Type", "Category Name"];

/// Platform data dir, created on demand. Overridable per invocation with
/// `--data-dir`.
pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.to_path_buf())
}

fn unavailable(what: &'static str) -> impl FnOnce(csv::Error) -> TrackerError {
    move |e| TrackerError::StoreUnavailable {
        what,
        reason: e.to_string(),
    }
}

/// Flat-file set of named accounts. The whole set is rewritten on every
/// save; there are no partial updates.
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Load the store, initializing a header-only file on first run.
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        let mut store = Self {
            path,
            accounts: Vec::new(),
        };
        if store.path.exists() {
            let mut rdr =
                csv::Reader::from_path(&store.path).map_err(unavailable("accounts store"))?;
            for rec in rdr.deserialize() {
                let account: Account = rec.map_err(unavailable("accounts store"))?;
                store.accounts.push(account);
            }
        } else {
            store.save()?;
        }
        Ok(store)
    }

    /// Overwrite the persisted set with the in-memory one.
    pub fn save(&self) -> TrackerResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(unavailable("accounts store"))?;
        wtr.write_record(ACCOUNT_HEADERS)
            .map_err(unavailable("accounts store"))?;
        for account in &self.accounts {
            wtr.serialize(account)
                .map_err(unavailable("accounts store"))?;
        }
        wtr.flush().map_err(|e| TrackerError::StoreUnavailable {
            what: "accounts store",
            reason: e.to_string(),
        })
    }

    /// Append a new account with current balance = opening balance.
    pub fn add(&mut self, name: &str, opening_balance: Decimal) -> TrackerResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "account name must not be empty".into(),
            ));
        }
        self.accounts.push(Account {
            name: name.to_string(),
            opening_balance,
            current_balance: opening_balance,
        });
        self.save()
    }

    /// Add a signed delta to the matching account's current balance, in
    /// memory only. Returns whether any row matched; a miss is a no-op,
    /// left to the caller to surface.
    pub fn apply_delta(&mut self, name: &str, delta: Decimal) -> bool {
        match self.accounts.iter_mut().find(|a| a.name == name) {
            Some(account) => {
                account.current_balance += delta;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flat-file set of (type, name) category pairs. Duplicates are tolerated;
/// the built-in defaults are not persisted, only prepended on read.
pub struct CategoryStore {
    path: PathBuf,
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Load the store, seeding one "Other" row per type on first run.
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        let mut store = Self {
            path,
            categories: Vec::new(),
        };
        if store.path.exists() {
            let mut rdr =
                csv::Reader::from_path(&store.path).map_err(unavailable("categories store"))?;
            for rec in rdr.deserialize() {
                let category: Category = rec.map_err(unavailable("categories store"))?;
                store.categories.push(category);
            }
        } else {
            store.categories = vec![
                Category {
                    kind: TxKind::Expense,
                    name: "Other".into(),
                },
                Category {
                    kind: TxKind::Income,
                    name: "Other".into(),
                },
            ];
            store.save()?;
        }
        Ok(store)
    }

    pub fn save(&self) -> TrackerResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(unavailable("categories store"))?;
        wtr.write_record(CATEGORY_HEADERS)
            .map_err(unavailable("categories store"))?;
        for category in &self.categories {
            wtr.serialize(category)
                .map_err(unavailable("categories store"))?;
        }
        wtr.flush().map_err(|e| TrackerError::StoreUnavailable {
            what: "categories store",
            reason: e.to_string(),
        })
    }

    /// Append a category. Duplicates are not checked.
    pub fn add(&mut self, kind: TxKind, name: &str) -> TrackerResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "category name must not be empty".into(),
            ));
        }
        self.categories.push(Category {
            kind,
            name: name.to_string(),
        });
        self.save()
    }

    /// Built-in defaults for the type followed by the stored entries of
    /// that type, in insertion order. Defaults always come first so they
    /// sort first in selection lists.
    pub fn categories_for(&self, kind: TxKind) -> Vec<String> {
        let mut names: Vec<String> = kind.defaults().iter().map(|s| s.to_string()).collect();
        names.extend(
            self.categories
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.name.clone()),
        );
        names
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
