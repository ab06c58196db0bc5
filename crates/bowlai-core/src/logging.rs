//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "BOWLAI_LOG";

const LOG_FILE_NAME: &str = "bowlai.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/bowlai/logs/` because the terminal UI
/// owns stdout. Log level is controlled by the `BOWLAI_LOG` environment variable.
///
/// # Examples
/// ```bash
/// BOWLAI_LOG=debug bowlai
/// BOWLAI_LOG=bowlai_app=trace bowlai --route /history
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via BOWLAI_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("bowlai=info,bowlai_app=info,bowlai_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("BowlAI starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Directory holding the daily log files
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("bowlai").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_bowlai_logs() {
        assert!(log_directory().ends_with("bowlai/logs"));
    }
}
