// src/logging.rs
// =============================================================================
// Sets up tracing for the whole run.
//
// Every log record goes to stderr. Stdout is reserved for the index (or the
// JSON report) so it can be piped somewhere else untouched.
//
// RUST_LOG takes precedence; otherwise the level is `info`, or `debug` with
// --verbose.
// =============================================================================

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const LOG_FILTER: &str = "RUST_LOG";

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(format!("lodash_docgen={}", default_level)));

    // try_init: a second call (tests) must not panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
