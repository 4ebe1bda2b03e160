use std::env;
use std::path::PathBuf;
use std::process;

use campaign_transactions::{logging, run};
use log::info;

const DEFAULT_CONFIG: &str = "config.toml";

fn main() {
    // Optional single argument: the config file path
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.toml]", args[0]);
        process::exit(1);
    }
    let config_path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG));

    // Initialize logger at info unless RUST_LOG says otherwise
    logging::init();

    info!("generating transactions with config: {}", config_path.display());

    if let Err(e) = run(&config_path) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
