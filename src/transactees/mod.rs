pub mod index;
pub mod transactee;

pub use index::TransacteeIndex;
pub use transactee::Transactee;
