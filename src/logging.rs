//! Diagnostic logging setup.
//!
//! Logs go to stderr, filtered by `$VIMDEMUX_LOG` (an `EnvFilter`
//! directive, e.g. `vimdemux=debug`). The default is `warn`, which keeps
//! the editor's status line clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VIMDEMUX_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
