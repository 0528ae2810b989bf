//! Logging setup
//!
//! `RUST_LOG` controls verbosity; without it only errors are shown so refused
//! actions do not put log lines between the menus.

use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "error";

fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Setup logging for the application
pub fn setup_logging() {
    builder(Env::default()).init();
}
