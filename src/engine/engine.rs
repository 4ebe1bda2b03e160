use log::warn;

use crate::engine::enrichers::enrich;
use crate::errors::Result;
use crate::identity::{IdentityStore, composite_key};
use crate::io::RawRow;
use crate::transactees::TransacteeIndex;
use crate::transactions::{SourceColumns, Transaction, TransactionType};

/// State of one generation run: the lookups it consults and the
/// transactions produced so far, in input order.
pub struct TransactionEngine {
    pub transactees: TransacteeIndex,
    pub identities: IdentityStore,
    pub transactions: Vec<Transaction>,
}

impl TransactionEngine {
    pub fn new(transactees: TransacteeIndex, identities: IdentityStore) -> Self {
        Self {
            transactees,
            identities,
            transactions: Vec::new(),
        }
    }

    /// Turn one source row into a transaction.
    ///
    /// A row whose id has no transactee is still normalized, without a
    /// `transactee_id`. Only a missing source column fails.
    pub fn normalize(&self, row: &RawRow, kind: TransactionType) -> Result<Transaction> {
        let columns = SourceColumns::for_type(kind);
        let transaction_id = row.get(&columns.id)?;

        let transactee_id = self
            .transactees
            .resolve(kind, transaction_id)
            .map(str::to_string);
        if transactee_id.is_none() {
            warn!(
                "no match found for {} id {} in the transactees file",
                kind, transaction_id
            );
        }

        let id = self
            .identities
            .lookup_or_mint(&composite_key(kind, transaction_id));

        Ok(Transaction {
            id,
            transaction_type: row.get(&columns.subtype)?.trim().to_string(),
            transaction_id: transaction_id.to_string(),
            transactee_id,
            party_id: row.get("OrgID")?.to_string(),
            amount: row.get(&columns.amount)?.to_string(),
            filed_date: row.get("FiledDate")?.to_string(),
            amended: row.get("Amended")?.to_string(),
            kind: enrich(kind, row)?,
        })
    }

    /// Normalize a row and append it to the run's output.
    pub fn process_record(&mut self, row: &RawRow, kind: TransactionType) -> Result<()> {
        let transaction = self.normalize(row, kind)?;
        self.transactions.push(transaction);
        Ok(())
    }

    pub fn process_records<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a RawRow>,
        kind: TransactionType,
    ) -> Result<()> {
        for row in rows {
            self.process_record(row, kind)?;
        }
        Ok(())
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}
