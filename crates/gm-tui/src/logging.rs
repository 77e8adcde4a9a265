//! Log file setup
//!
//! The terminal belongs to the UI, so logs only go to a file. Without a file
//! no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file when `--log-file` is absent.
pub const LOG_FILE_ENV: &str = "GM_LOG_FILE";

/// Filter from RUST_LOG, or `info` (`debug` when verbose).
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Install a plain-text subscriber appending to `path`.
pub fn init(path: &Path, verbose: bool) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}
