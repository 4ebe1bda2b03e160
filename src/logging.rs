use env_logger::{Builder, Env};

/// Level shown when `RUST_LOG` is unset: progress lines and per-record
/// warnings both print.
pub const DEFAULT_FILTER: &str = "info";

pub fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
}

/// Install the process logger. `RUST_LOG` still overrides the default.
pub fn init() {
    builder().init();
}
