// File logging for the TUI.
//
// The terminal belongs to the interface while it runs, so events go to a
// log file in the platform cache directory instead of stdout/stderr.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `SNIPW_LOG=snipw=debug`.
pub const LOG_ENV: &str = "SNIPW_LOG";

const DEFAULT_FILTER: &str = "snipw=info";
const LOG_FILE: &str = "snipw.log";

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|mut path| {
        path.push("snipw");
        path
    })
}

/// Install the global subscriber.
///
/// The returned guard flushes pending lines on drop and must be kept alive
/// until the program exits. Returns `None` when no log directory is usable.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: cannot create log directory {}: {}", dir.display(), e);
        return None;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init();

    match result {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}
