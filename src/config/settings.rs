use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use serde::Deserialize;

use crate::errors::{GenerateError, Result};

fn default_encoding() -> String {
    "utf-8".to_string()
}

/// Settings shared with the upstream transactee generator.
#[derive(Debug, Clone, Deserialize)]
pub struct TransacteesConfig {
    /// Transactee list file name, relative to the data directory.
    pub outfile: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsConfig {
    pub data_dir: PathBuf,
    pub datafiles: Vec<String>,
    pub outfile: String,
    #[serde(default)]
    pub pretty_print: bool,
    /// WHATWG label of the text encoding the data files are written in.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub generate_transactees: TransacteesConfig,
    pub generate_transactions: TransactionsConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenerateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn transactees_path(&self) -> PathBuf {
        self.datafile_path(&self.generate_transactees.outfile)
    }

    /// The output document, which doubles as the prior-run document.
    pub fn output_path(&self) -> PathBuf {
        self.datafile_path(&self.generate_transactions.outfile)
    }

    pub fn datafile_path(&self, name: &str) -> PathBuf {
        self.generate_transactions.data_dir.join(name)
    }

    pub fn source_encoding(&self) -> Result<&'static Encoding> {
        let label = &self.generate_transactions.encoding;
        Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| GenerateError::UnknownEncoding(label.clone()))
    }
}
