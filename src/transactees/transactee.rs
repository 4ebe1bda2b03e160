use serde::Deserialize;

use crate::transactions::TransactionType;

/// An entry of the upstream transactee list. Other fields the list may carry
/// (names, addresses) are not needed here and are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transactee {
    pub id: String,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub transaction_ids: Vec<String>,
}
