use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use uuid::Uuid;

use crate::errors::{GenerateError, Result};
use crate::io::read_json;
use crate::transactions::{PriorTransaction, TransactionType};

/// Ids handed out by the previous run, keyed by `type ++ transaction_id`.
///
/// The map is a snapshot: ids minted during the current run are never added
/// back, so reuse only ever comes from the prior document.
#[derive(Debug, Default)]
pub struct IdentityStore {
    ids: HashMap<String, String>,
}

impl IdentityStore {
    /// Load the prior-run document. A missing file means a fresh run.
    pub fn load(path: &Path) -> Result<Self> {
        match read_json::<Vec<PriorTransaction>>(path) {
            Ok(prior) => {
                info!("loaded {} record(s) from previous run {}", prior.len(), path.display());
                Ok(Self::from_prior(prior))
            }
            Err(GenerateError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                info!("no previous output at {}, minting fresh ids", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn from_prior(prior: impl IntoIterator<Item = PriorTransaction>) -> Self {
        let ids = prior
            .into_iter()
            .map(|entry| (composite_key(entry.kind, &entry.transaction_id), entry.id))
            .collect();
        Self { ids }
    }

    /// Reuse the prior id for `key`, or mint a new upper-case v4 UUID.
    pub fn lookup_or_mint(&self, key: &str) -> String {
        match self.ids.get(key) {
            Some(id) => id.clone(),
            None => mint_id(),
        }
    }
}

pub fn composite_key(kind: TransactionType, transaction_id: &str) -> String {
    format!("{}{}", kind.label(), transaction_id)
}

pub fn mint_id() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}
