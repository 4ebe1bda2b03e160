use crate::errors::{GenerateError, Result};
use crate::transactions::TransactionType;

/// Decide the record kind of a data file from its name.
///
/// The patterns are checked in order, so a name matching several of them
/// takes the first.
pub fn classify(filename: &str) -> Result<TransactionType> {
    const PATTERNS: [(&str, TransactionType); 4] = [
        ("CashContribution", TransactionType::Contribution),
        ("InKindContribution", TransactionType::InKindContribution),
        ("Expenditure", TransactionType::Expenditure),
        ("OtherReceipts", TransactionType::Receipt),
    ];

    PATTERNS
        .iter()
        .find(|(pattern, _)| filename.contains(pattern))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| GenerateError::UnrecognizedFilename(filename.to_string()))
}

/// Source column names for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumns {
    pub id: String,
    pub subtype: String,
    pub amount: String,
}

impl SourceColumns {
    /// In-kind files keep the full prefix on their id column but share the
    /// `Contribution` prefix for the subtype and amount columns.
    pub fn for_type(kind: TransactionType) -> Self {
        let id_base = kind.label();
        let value_base = match kind {
            TransactionType::InKindContribution => TransactionType::Contribution.label(),
            other => other.label(),
        };
        Self {
            id: format!("{id_base}ID"),
            subtype: format!("{value_base}Type"),
            amount: format!("{value_base}Amount"),
        }
    }
}
