use std::path::Path;

use log::info;

use crate::config::Config;
use crate::engine::TransactionEngine;
use crate::errors::Result;
use crate::identity::IdentityStore;
use crate::io::{read_source_file, write_transactions};
use crate::transactees::TransacteeIndex;
use crate::transactions::{Transaction, TransactionType, classify};

/// Load the config at `config_path` and run the generator.
pub fn run(config_path: &Path) -> Result<usize> {
    let config = Config::load(config_path)?;
    run_with_config(&config)
}

/// Generate the transaction document described by `config`, returning how
/// many records were written. Nothing is written unless every input loads.
pub fn run_with_config(config: &Config) -> Result<usize> {
    let transactions = generate(config)?;
    let output = config.output_path();
    info!("writing {} record(s) to {}", transactions.len(), output.display());
    write_transactions(
        &transactions,
        &output,
        config.generate_transactions.pretty_print,
    )?;
    Ok(transactions.len())
}

/// Build the full transaction list in memory.
pub fn generate(config: &Config) -> Result<Vec<Transaction>> {
    let encoding = config.source_encoding()?;
    let transactees = TransacteeIndex::load(&config.transactees_path())?;

    let datafiles = config
        .generate_transactions
        .datafiles
        .iter()
        .map(|name| classify(name).map(|kind| (name.as_str(), kind)))
        .collect::<Result<Vec<(&str, TransactionType)>>>()?;

    let identities = IdentityStore::load(&config.output_path())?;
    let mut engine = TransactionEngine::new(transactees, identities);

    for (name, kind) in datafiles {
        info!("loading {} data from {}", kind, name);
        let rows = read_source_file(&config.datafile_path(name), encoding)?;
        engine.process_records(&rows, kind)?;
    }

    Ok(engine.into_transactions())
}
