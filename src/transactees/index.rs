use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use crate::errors::{GenerateError, Result};
use crate::io::read_json;
use crate::transactees::Transactee;
use crate::transactions::TransactionType;

/// Transactee lookup by (type, source record id).
///
/// Built in list order and keeping only the first entry per key, so when an
/// id is claimed by several transactees of the same type the earliest one
/// wins.
#[derive(Debug, Default)]
pub struct TransacteeIndex {
    by_record: HashMap<(TransactionType, String), String>,
}

impl TransacteeIndex {
    /// Load the transactee list. Unlike the prior-run document, this file
    /// must exist.
    pub fn load(path: &Path) -> Result<Self> {
        info!("loading transactees from {}", path.display());
        let transactees: Vec<Transactee> = read_json(path).map_err(|err| match err {
            GenerateError::Io(io) if io.kind() == ErrorKind::NotFound => {
                GenerateError::TransacteesNotFound(path.to_path_buf())
            }
            other => other,
        })?;
        info!("{} transactee record(s) loaded", transactees.len());
        Ok(Self::new(transactees))
    }

    pub fn new(transactees: impl IntoIterator<Item = Transactee>) -> Self {
        let mut by_record = HashMap::new();
        for transactee in transactees {
            for record_id in transactee.transaction_ids {
                by_record
                    .entry((transactee.transaction_type, record_id))
                    .or_insert_with(|| transactee.id.clone());
            }
        }
        Self { by_record }
    }

    pub fn resolve(&self, kind: TransactionType, record_id: &str) -> Option<&str> {
        self.by_record
            .get(&(kind, record_id.to_string()))
            .map(String::as_str)
    }
}
