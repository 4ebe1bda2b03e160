use crate::errors::Result;
use crate::io::RawRow;
use crate::transactions::{Endorser, TransactionKind, TransactionType};

const ENDORSER_SLOTS: [&str; 3] = ["1", "2", "3"];

/// Build the type-specific part of a transaction from its source row.
pub fn enrich(kind: TransactionType, row: &RawRow) -> Result<TransactionKind> {
    match kind {
        TransactionType::Contribution => Ok(TransactionKind::Contribution),
        TransactionType::InKindContribution => Ok(TransactionKind::InKindContribution {
            inkind_nature: row.get("NatureOfInKindContribution")?.to_string(),
        }),
        TransactionType::Expenditure => Ok(TransactionKind::Expenditure {
            explanation: row.get("Explanation")?.to_lowercase(),
            purpose: row.get("Purpose")?.to_lowercase(),
        }),
        TransactionType::Receipt => Ok(TransactionKind::Receipt {
            endorsers: endorsers(row)?,
        }),
    }
}

/// Endorser slots 1..3, skipping slots whose fields are all empty.
pub fn endorsers(row: &RawRow) -> Result<Vec<Endorser>> {
    let mut endorsers = Vec::new();
    for slot in ENDORSER_SLOTS {
        let endorser = Endorser(
            row.get(&format!("EndorserName{slot}"))?.to_string(),
            row.get(&format!("EndorserAddress{slot}"))?.to_string(),
            row.get(&format!("EndorserGuaranteedAMT{slot}"))?.to_string(),
        );
        if !endorser.is_blank() {
            endorsers.push(endorser);
        }
    }
    Ok(endorsers)
}
