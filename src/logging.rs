use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Configuration for the logging system
pub struct LogConfig {
    /// Directory where log files will be stored
    pub log_dir: PathBuf,
    /// Prefix for log file names
    pub file_prefix: String,
    /// Maximum number of log files to keep (rotation)
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".context-menu-edit")
            .join("logs");

        Self {
            log_dir,
            file_prefix: "context-menu-edit".to_string(),
            max_files: 5,
        }
    }
}

/// Initialize file logging for the in-process extension.
///
/// Explorer hosts the extension, so there is no console to write to; output
/// goes to rotated JSON log files only. Log levels are configurable through
/// the `RUST_LOG` environment variable and default to `info`.
///
/// # Log Targets
/// - `settings` - settings loading and validation
/// - `shellext::explorer_command` - top-level command queries
/// - `shellext::sub_commands` - subcommand enumeration
/// - `shellext::action_command` - leaf command queries
/// - `shellext::dll` - class object requests
pub fn init_logging(config: LogConfig) -> Result<LogGuard> {
    // Ensure log directory exists
    std::fs::create_dir_all(&config.log_dir).context("Failed to create log directory")?;

    // Create file appender with rotation
    // This will create files like: context-menu-edit.log, context-menu-edit.log.1, etc.
    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .max_log_files(config.max_files)
        .build(&config.log_dir)
        .context("Failed to create file appender")?;

    // Create non-blocking writer for file output
    // IMPORTANT: The guard MUST be kept alive for as long as the module stays loaded
    let (non_blocking_file, worker_guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer (JSON format for structured logging)
    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_filter(env_filter);

    // try_init rather than init: the host process may already carry a global
    // subscriber, and a second registration must not panic inside Explorer.
    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {e}"))?;

    tracing::info!(
        target: "main",
        log_dir = %config.log_dir.display(),
        max_files = config.max_files,
        "Logging system initialized"
    );

    Ok(LogGuard {
        _worker_guard: worker_guard,
    })
}

/// Guard that ensures logs are flushed before the module unloads
/// This wraps the WorkerGuard from tracing_appender which MUST be kept alive
/// while the extension is loaded to ensure file logging works properly
pub struct LogGuard {
    _worker_guard: tracing_appender::non_blocking::WorkerGuard,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        tracing::info!(target: "main", "Flushing logs before shutdown");
        // WorkerGuard will be dropped here, flushing remaining logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.file_prefix, "context-menu-edit");
        assert_eq!(config.max_files, 5);
    }

    #[test]
    fn test_log_directory_creation() {
        let temp_dir = std::env::temp_dir().join("context_menu_edit_test_logs");
        let config = LogConfig {
            log_dir: temp_dir.clone(),
            file_prefix: "test".to_string(),
            max_files: 3,
        };

        let result = init_logging(config);
        assert!(result.is_ok());
        assert!(temp_dir.exists());

        // Keep the guard alive during test
        let _guard = result.unwrap();

        // Cleanup
        let _ = std::fs::remove_dir_all(temp_dir);
    }
}
