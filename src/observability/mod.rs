//! Logging setup
//!
//! Every subsystem logs through `tracing`. The subscriber is installed
//! once by the binary: human-readable lines by default, one JSON object
//! per line when `log_json` is set. `RUST_LOG` overrides the level.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "prostoponyatno=debug,tower_http=debug,info"
    } else {
        "info"
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "logging already initialized");
    }
}
