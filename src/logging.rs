//! `tracing` setup.
//!
//! Events go to stderr and are filtered by the `TEE_LOG` environment variable
//! (any `EnvFilter` directive, e.g. `TEE_LOG=debug`). Without it only
//! warnings and errors pass, and the crate emits none of those: user-facing
//! diagnostics are written directly, not through `tracing`.
//!
//! Both share stderr, so with `TEE_LOG=debug` (or anything more verbose than
//! `warn`) the event lines are interleaved with the diagnostic lines.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "TEE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter from `TEE_LOG`, falling back to the default when the
/// variable is unset or does not parse.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
