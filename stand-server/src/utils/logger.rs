//! Logging Infrastructure
//!
//! Structured logging setup for development (stdout) and production
//! (daily-rolling files under the work dir).

use std::path::PathBuf;

/// Initialize the logger with defaults (info, stdout).
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional file target.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<PathBuf>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && dir.exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "stand-server");
        subscriber.with_writer(file_appender).with_ansi(false).init();
        return;
    }

    subscriber.init();
}
