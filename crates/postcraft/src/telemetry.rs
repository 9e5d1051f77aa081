//! Logging initialization.

use postcraft_error::{ConfigError, PostcraftResult};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the console subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` when verbose
/// and `info` when not. Logs go to stderr so command output on stdout stays
/// clean for piping.
pub fn init_logging(verbose: bool) -> PostcraftResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
