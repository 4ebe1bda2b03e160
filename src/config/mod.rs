pub mod settings;

pub use settings::{Config, TransacteesConfig, TransactionsConfig};
