pub mod orchestrator;

pub use orchestrator::{generate, run, run_with_config};
