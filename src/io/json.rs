use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::{GenerateError, Result};
use crate::transactions::Transaction;

/// Read a whole JSON document. I/O errors (including `NotFound`) are passed
/// through untouched so callers can decide whether absence is fatal.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| GenerateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode the transaction list. Pretty output has sorted keys and a
/// four-space indent; otherwise the most compact encoding is used.
pub fn encode_transactions<W: Write>(
    transactions: &[Transaction],
    writer: W,
    pretty: bool,
) -> Result<()> {
    if pretty {
        let records = transactions
            .iter()
            .map(sorted_record)
            .collect::<Result<Vec<_>>>()?;
        let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(writer, transactions)?;
    }
    Ok(())
}

/// One record as a key-ordered map. Records hold no nested objects, so
/// ordering the top level is enough.
fn sorted_record(transaction: &Transaction) -> Result<BTreeMap<String, Value>> {
    Ok(serde_json::from_value(serde_json::to_value(transaction)?)?)
}

/// Overwrite `path` with the transaction list.
pub fn write_transactions(transactions: &[Transaction], path: &Path, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode_transactions(transactions, &mut writer, pretty)?;
    writer.flush()?;
    Ok(())
}
