use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggerConfig;
use crate::domain::{ConfigError, ConfigResult};

/// Log file value meaning "write to standard output"
pub const STDOUT: &str = "stdout";

/// Log file value meaning "write to standard error"
pub const STDERR: &str = "stderr";

/// Logger implementation using tracing
pub struct LoggerImpl {
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Install the global subscriber described by the `log` section.
    ///
    /// `log_file` is `stdout`, `stderr` or a file path. `RUST_LOG` directives,
    /// when set, refine the configured level. A file path is written through
    /// a non-blocking appender whose guard lives as long as the returned value.
    pub fn init(config: &LoggerConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.log_level)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(default_level).into())
            .from_env_lossy();

        let (writer, guard, ansi) = if config.log_file == STDOUT {
            (BoxMakeWriter::new(io::stdout), None, true)
        } else if config.log_file == STDERR {
            (BoxMakeWriter::new(io::stderr), None, true)
        } else {
            let path = Path::new(&config.log_file);
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file has no file name: {}", config.log_file))?;

            let (non_blocking, guard) =
                tracing_appender::non_blocking(rolling::never(directory, file_name));
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        };

        let layer = if config.log_pretty_format {
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(layer)
            .try_init()
            .context("Failed to install the global log subscriber")?;

        tracing::info!(
            level = %config.log_level,
            pretty = config.log_pretty_format,
            log_file = %config.log_file,
            "logger initialized"
        );

        Ok(Self { _guard: guard })
    }
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> ConfigResult<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(level.to_string())),
    }
}
