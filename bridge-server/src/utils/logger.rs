//! Logging Infrastructure
//!
//! Structured logging setup with console output and optional daily-rolling
//! file output. The level comes from `RUST_LOG` when set, otherwise from
//! the explicit argument, defaulting to `info`.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// When `log_dir` names an existing directory, log lines are additionally
/// written to a daily-rolling `bridge-server.*` file inside it.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "bridge-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
