//! Stderr logging for the CLI.
//!
//! Stdout is reserved for tables and JSON, so all log events go to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--verbose` is given.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "warn,killport=debug,killport_core=debug";

/// Install the global tracing subscriber.
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is honoured and
/// falls back to warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("warning: could not initialise logging: {e}");
    }
}
