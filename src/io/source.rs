use std::collections::HashMap;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{DecoderResult, Encoding};
use log::debug;

use crate::errors::{GenerateError, Result};

/// One data row keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Result<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| GenerateError::MissingColumn(column.to_string()))
    }
}

/// Decode `bytes`, dropping any sequence that is malformed for `encoding`.
/// A leading BOM is stripped. Returns the text and the number of dropped
/// sequences.
pub fn decode_dropping_malformed(bytes: &[u8], encoding: &'static Encoding) -> (String, usize) {
    let mut decoder = encoding.new_decoder_with_bom_removal();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len() * 3);
    let mut text = String::with_capacity(capacity);
    let mut remaining = bytes;
    let mut dropped = 0;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(remaining, &mut text, true);
        remaining = &remaining[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::Malformed(_, _) => dropped += 1,
            DecoderResult::OutputFull => {
                let extra = decoder
                    .max_utf8_buffer_length_without_replacement(remaining.len())
                    .unwrap_or(remaining.len() * 3);
                text.reserve(extra.max(4));
            }
        }
    }

    (text, dropped)
}

/// Parse CSV text with a header row into [`RawRow`]s.
///
/// Field values are kept exactly as written. Short rows are accepted; the
/// columns they lack are simply absent from the row.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(RawRow::from_pairs(headers.iter().zip(record.iter())));
    }
    Ok(rows)
}

/// Read and parse one data file.
pub fn read_source_file(path: &Path, encoding: &'static Encoding) -> Result<Vec<RawRow>> {
    let bytes = fs::read(path)?;
    let (text, dropped) = decode_dropping_malformed(&bytes, encoding);
    if dropped > 0 {
        debug!(
            "dropped {} undecodable sequence(s) from {}",
            dropped,
            path.display()
        );
    }
    parse_rows(&text)
}
