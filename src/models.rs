// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in categories, always surfaced ahead of user-defined ones.
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] =
    &["Food", "Shopping", "Bills", "Transport", "Other"];
pub const DEFAULT_INCOME_CATEGORIES: &[&str] =
    &["Salary", "Freelancing", "Investments", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub fn defaults(&self) -> &'static [&'static str] {
        match self {
            TxKind::Expense => DEFAULT_EXPENSE_CATEGORIES,
            TxKind::Income => DEFAULT_INCOME_CATEGORIES,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Expense => write!(f, "Expense"),
            TxKind::Income => write!(f, "Income"),
        }
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(TxKind::Expense),
            "income" => Ok(TxKind::Income),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "Account Name")]
    pub name: String,
    #[serde(rename = "Opening Balance")]
    pub opening_balance: Decimal,
    #[serde(rename = "Current Balance")]
    pub current_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "Category Type")]
    pub kind: TxKind,
    #[serde(rename = "Category Name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: String,
    pub amount: Decimal,
    pub account: String,
    pub note: Option<String>,
}

impl Transaction {
    /// Expenses subtract from the owning account, income adds.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxKind::Expense => -self.amount,
            TxKind::Income => self.amount,
        }
    }
}

/// A ledger row as read back, before any coercion. The ledger is the one
/// store a user may hand-edit, so fields stay stringly until the report
/// path parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Notes")]
    pub note: String,
}

impl RawRow {
    /// Coerce a raw row into a typed transaction. Rows with an unparseable
    /// date are dropped (None); a type outside Expense/Income drops the row
    /// the same way, since every pivot keys on the two known kinds; an
    /// unparseable amount coerces to zero so the row survives with no
    /// contribution to sums.
    pub fn parse(&self) -> Option<Transaction> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let kind = self.kind.parse::<TxKind>().ok()?;
        let amount = self
            .amount
            .trim()
            .parse::<Decimal>()
            .unwrap_or(Decimal::ZERO);
        let note = Some(self.note.trim().to_string()).filter(|n| !n.is_empty());
        Some(Transaction {
            date,
            kind,
            category: self.category.trim().to_string(),
            amount,
            account: self.account.trim().to_string(),
            note,
        })
    }
}

impl From<&Transaction> for RawRow {
    fn from(tx: &Transaction) -> Self {
        RawRow {
            date: tx.date.to_string(),
            kind: tx.kind.to_string(),
            category: tx.category.clone(),
            amount: tx.amount.to_string(),
            account: tx.account.clone(),
            note: tx.note.clone().unwrap_or_default(),
        }
    }
}
