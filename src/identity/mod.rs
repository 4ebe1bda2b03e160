pub mod store;

pub use store::{IdentityStore, composite_key, mint_id};
