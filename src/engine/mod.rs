pub mod engine;
pub mod enrichers;

pub use engine::TransactionEngine;
