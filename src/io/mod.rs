pub mod json;
pub mod source;

pub use json::{encode_transactions, read_json, write_transactions};
pub use source::{RawRow, read_source_file};
