//! Structured logging for Kbase.
//!
//! Wraps `tracing-subscriber` so binaries can install a global subscriber
//! from a [`LoggingConfig`]. `RUST_LOG` takes precedence over the configured
//! level when it is set.


use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error occurred while preparing the log file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing log level
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Error in subscriber setup
    #[error("Subscriber error: {0}")]
    Subscriber(String),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the global subscriber from `config`.
///
/// Returns the file writer's guard when logging to a file; keep it alive for
/// as long as logs should be flushed. Calling this after a global subscriber
/// has already been installed is a no-op.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if tracing::dispatcher::has_been_set() {
        return Ok(None);
    }

    let (writer, guard, file_ignored) = match (&config.file, config.stdout) {
        (Some(path), false) => {
            let (non_blocking, guard) = create_non_blocking_file(path)?;
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        (Some(_), true) => (BoxMakeWriter::new(std::io::stdout), None, true),
        (None, true) => (BoxMakeWriter::new(std::io::stdout), None, false),
        (None, false) => return Ok(None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.level))
        .with_writer(writer)
        .with_target(true)
        .with_line_number(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Default => builder.try_init(),
    };
    result.map_err(|e| LogError::Subscriber(e.to_string()))?;

    if file_ignored {
        tracing::warn!("Configured for stdout; file logging ignored");
    }

    Ok(guard)
}

/// Filter honouring `RUST_LOG`, falling back to `level`.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<(NonBlocking, WorkerGuard)> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| LogError::Subscriber(format!("Not a file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}
