use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a generation run.
///
/// Per-record conditions (no transactee match, no prior id) are not errors
/// and never show up here.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("could not read configuration file {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("unknown text encoding '{0}'")]
    UnknownEncoding(String),
    #[error("transactee file {0} not found, generate the transactee list first")]
    TransacteesNotFound(PathBuf),
    #[error("unrecognized filename: {0}")]
    UnrecognizedFilename(String),
    #[error("source row has no '{0}' column")]
    MissingColumn(String),
    #[error("malformed JSON document {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not encode transactions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not parse CSV rows: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
