//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Environment variable holding the log filter, e.g. `JSONX_LOG=debug`.
pub const LOG_ENV: &str = "JSONX_LOG";

/// Installs a stderr subscriber. Defaults to `warn`; stdout is left for
/// `--no-open` output.
pub fn init() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}
