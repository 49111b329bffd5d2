use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming a log file; overrides `logging.file`.
pub const LOG_ENV_VAR: &str = "CONDUIT_FEED_LOG";

/// Resolve the log file path: env var first, then config.
pub fn log_path(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|path| !path.is_empty())
        .or_else(|| config.file.clone())
        .map(PathBuf::from)
}

/// Initialize tracing with file output.
///
/// Logging is disabled unless a log file is configured: stdout belongs to
/// the TUI. `RUST_LOG` takes precedence over `logging.level`.
///
/// Returns the path written to, if logging was enabled.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let path = log_path(config)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}
