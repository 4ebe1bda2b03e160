use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical transaction kinds. Serialized verbatim as the `type` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Contribution,
    InKindContribution,
    Expenditure,
    Receipt,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Contribution => "Contribution",
            TransactionType::InKindContribution => "InKindContribution",
            TransactionType::Expenditure => "Expenditure",
            TransactionType::Receipt => "Receipt",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A loan endorser: name, address, guaranteed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endorser(pub String, pub String, pub String);

impl Endorser {
    pub fn is_blank(&self) -> bool {
        self.0.len() + self.1.len() + self.2.len() == 0
    }
}

/// Per-type payload. The variant name is written as the `type` key and the
/// variant fields sit next to the common ones, so a field only exists on the
/// types that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TransactionKind {
    Contribution,
    InKindContribution {
        inkind_nature: String,
    },
    Expenditure {
        explanation: String,
        purpose: String,
    },
    Receipt {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        endorsers: Vec<Endorser>,
    },
}

/// One normalized record of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: String,
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactee_id: Option<String>,
    pub party_id: String,
    pub amount: String,
    pub filed_date: String,
    pub amended: String,
    #[serde(flatten)]
    pub kind: TransactionKind,
}

/// The slice of a prior-run record needed to carry its id forward.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base(kind: TransactionKind) -> Transaction {
        Transaction {
            id: "A1".to_string(),
            transaction_type: "Loan".to_string(),
            transaction_id: "55".to_string(),
            transactee_id: None,
            party_id: "9".to_string(),
            amount: "100.00".to_string(),
            filed_date: "2017-01-02".to_string(),
            amended: "N".to_string(),
            kind,
        }
    }

    #[test]
    fn test_contribution_has_no_enrichment_keys() {
        let value = serde_json::to_value(base(TransactionKind::Contribution)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["type"], "Contribution");
        for key in ["explanation", "purpose", "endorsers", "inkind_nature", "transactee_id"] {
            assert!(!object.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn test_receipt_without_endorsers_omits_field() {
        let value =
            serde_json::to_value(base(TransactionKind::Receipt { endorsers: vec![] })).unwrap();
        assert_eq!(value["type"], "Receipt");
        assert!(value.get("endorsers").is_none());
    }

    #[test]
    fn test_endorsers_serialize_as_arrays() {
        let mut tx = base(TransactionKind::Receipt {
            endorsers: vec![Endorser("Jane".into(), String::new(), String::new())],
        });
        tx.transactee_id = Some("T9".to_string());
        let value = serde_json::to_value(tx).unwrap();
        assert_eq!(value["endorsers"], json!([["Jane", "", ""]]));
        assert_eq!(value["transactee_id"], "T9");
    }

    #[test]
    fn test_expenditure_fields_sit_beside_common_ones() {
        let tx = base(TransactionKind::Expenditure {
            explanation: "printing".into(),
            purpose: "advertising".into(),
        });
        let value = serde_json::to_value(tx).unwrap();
        assert_eq!(value["type"], "Expenditure");
        assert_eq!(value["explanation"], "printing");
        assert_eq!(value["purpose"], "advertising");
        assert_eq!(value["transaction_id"], "55");
        assert!(value.get("endorsers").is_none());
        assert!(value.get("inkind_nature").is_none());
    }

    #[test]
    fn test_prior_transaction_ignores_extra_fields() {
        let prior: PriorTransaction = serde_json::from_value(json!({
            "id": "A1",
            "type": "Expenditure",
            "transaction_id": "77",
            "purpose": "travel"
        }))
        .unwrap();
        assert_eq!(prior.kind, TransactionType::Expenditure);
        assert_eq!(prior.transaction_id, "77");
    }

    #[test]
    fn test_blank_endorser() {
        assert!(Endorser(String::new(), String::new(), String::new()).is_blank());
        assert!(!Endorser(String::new(), " ".into(), String::new()).is_blank());
    }
}
