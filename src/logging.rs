//! Logging setup: compact stderr output, plus a JSON rolling log file when
//! `LOG_FILE_PATH` asks for one.
//!
//! Prompts and reports own stdout, so nothing here writes there.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const FALLBACK_FILE_NAME: &str = "bikeshare.log";

/// Installs the global subscriber.
///
/// Without a `log_file_path` only the stderr layer is installed and nothing
/// touches the filesystem. With one, JSON lines go to a daily rolling file at
/// that path and the returned guard must stay alive until exit so buffered
/// output is flushed.
///
/// `RUST_LOG` filters stderr (default `warn`); `RUST_LOG_JSON` filters the file
/// (default `debug`).
///
/// # Errors
///
/// Fails if the log directory or file cannot be created, or if a global
/// subscriber is already set.
pub fn init(log_file_path: Option<&str>) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "warn"));

    let (json_layer, guard) = match log_file_path {
        Some(path) => {
            let (log_dir, file_name) = split_log_path(path);
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(file_name)
                .build(&log_dir)
                .with_context(|| format!("creating log file {path}"))?;
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", "debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}

/// Directory and file-name prefix for the rolling appender. A bare file name
/// lands in the working directory.
fn split_log_path(path: &str) -> (PathBuf, String) {
    let path = Path::new(path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());
    (dir.to_path_buf(), name)
}

fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}
