pub mod classifier;
pub mod transaction;

pub use classifier::{SourceColumns, classify};
pub use transaction::{Endorser, PriorTransaction, Transaction, TransactionKind, TransactionType};
