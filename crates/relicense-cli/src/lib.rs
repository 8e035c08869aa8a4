//! relicense-cli library
//!
//! Exposes the command implementations and CLI types so tests can drive them
//! without spawning the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub use commands::types::{Cli, Commands};

/// Initialize tracing: debug level when verbose, info otherwise.
///
/// Diagnostics go to stderr; stdout belongs to the per-file report lines.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
