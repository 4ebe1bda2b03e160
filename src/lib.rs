pub mod config;
pub mod engine;
pub mod errors;
pub mod identity;
pub mod io;
pub mod logging;
pub mod orchestrator;
pub mod transactees;
pub mod transactions;

pub use config::Config;
pub use engine::TransactionEngine;
pub use errors::{GenerateError, Result};
pub use identity::IdentityStore;
pub use orchestrator::{generate, run, run_with_config};
pub use transactees::TransacteeIndex;
pub use transactions::{Transaction, TransactionKind, TransactionType};
