// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{RawRow, Transaction};

pub const LEDGER_HEADERS: [&str; 6] = ["Date", "Type", "Category", "Amount", "Account", "Notes"];

/// Append-only row store of all transactions. Rows are never rewritten;
/// every report pulls the full set fresh so the ledger stays the source
/// of truth.
pub trait Ledger {
    fn append_row(&mut self, tx: &Transaction) -> TrackerResult<()>;
    fn read_all(&self) -> TrackerResult<Vec<RawRow>>;
}

/// CSV-file ledger. Stands in for the remote sheet; the interface is the
/// same append-row / read-all-rows pair.
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Open the ledger, writing the header row if the file is missing or
    /// empty. Failure here is fatal to the session.
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        let needs_header = match std::fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                return Err(TrackerError::StoreUnavailable {
                    what: "ledger",
                    reason: e.to_string(),
                });
            }
        };
        if needs_header {
            let mut wtr = csv::Writer::from_path(&path).map_err(Self::unavailable)?;
            wtr.write_record(LEDGER_HEADERS).map_err(Self::unavailable)?;
            wtr.flush().map_err(|e| TrackerError::StoreUnavailable {
                what: "ledger",
                reason: e.to_string(),
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(e: csv::Error) -> TrackerError {
        TrackerError::StoreUnavailable {
            what: "ledger",
            reason: e.to_string(),
        }
    }
}

impl Ledger for CsvLedger {
    fn append_row(&mut self, tx: &Transaction) -> TrackerResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| TrackerError::StoreUnavailable {
                what: "ledger",
                reason: e.to_string(),
            })?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(RawRow::from(tx)).map_err(Self::unavailable)?;
        wtr.flush().map_err(|e| TrackerError::StoreUnavailable {
            what: "ledger",
            reason: e.to_string(),
        })
    }

    fn read_all(&self) -> TrackerResult<Vec<RawRow>> {
        let mut rdr = csv::Reader::from_path(&self.path).map_err(Self::unavailable)?;
        let mut rows = Vec::new();
        for rec in rdr.deserialize() {
            let row: RawRow = rec.map_err(Self::unavailable)?;
            rows.push(row);
        }
        Ok(rows)
    }
}
