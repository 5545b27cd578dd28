//! Diagnostic logging on stderr.
//!
//! Stdout belongs to the suite's title and banner, so the subscriber writes to
//! stderr only. Verbosity comes from `TMAIN_LOG` using `EnvFilter` syntax.

use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TMAIN_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Builds the filter from `TMAIN_LOG`, falling back to `warn` when the
/// variable is unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber. A subscriber that is already installed,
/// e.g. by a host program, is left in place.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter())
        .try_init();
}
