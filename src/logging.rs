//! Logging setup.
//!
//! The terminal belongs to the TUI, so events go only to a per-launch log
//! file under `<data_dir>/tattle/logs/`. Old files beyond [`MAX_LOG_FILES`]
//! are pruned at startup.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use chrono::{DateTime, Local, TimeZone};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Maximum number of log files to retain.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "tattle";

static LOG_GUARD: OnceLock<InstalledLog> = OnceLock::new();

/// Keeps the file writer alive and remembers where it writes.
struct InstalledLog {
    _guard: WorkerGuard,
    path: PathBuf,
}

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform does not provide a data directory.
    #[error("no suitable data directory available for logs")]
    NoDataDir,
    /// Failed to create the log directory.
    #[error("failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to enumerate existing log files for pruning.
    #[error("failed to read log directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to remove an obsolete log file.
    #[error("failed to remove old log file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create the log file for this launch.
    #[error("failed to create log file at {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A global subscriber was already installed.
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs the global subscriber. Subsequent calls are no-ops.
///
/// Returns the path of the log file in use, which on repeat calls is the one
/// created by the first.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Result<PathBuf, LoggingError> {
    if let Some(installed) = LOG_GUARD.get() {
        return Ok(installed.path.clone());
    }
    init_in(&log_directory()?)
}

fn init_in(log_dir: &Path) -> Result<PathBuf, LoggingError> {
    if let Some(installed) = LOG_GUARD.get() {
        return Ok(installed.path.clone());
    }

    let log_file_name = format_log_file_name(Local::now());
    let log_path = log_dir.join(&log_file_name);
    ensure_file_exists(&log_path)?;
    prune_old_logs(log_dir, MAX_LOG_FILES)?;

    let file_appender = rolling::never(log_dir, &log_file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer().with_ansi(false).with_writer(file_writer);

    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(InstalledLog {
        _guard: guard,
        path: log_path.clone(),
    });

    tracing::info!("logging initialized; log file at {}", log_path.display());
    Ok(log_path)
}

fn log_directory() -> Result<PathBuf, LoggingError> {
    let path = dirs::data_dir()
        .ok_or(LoggingError::NoDataDir)?
        .join(LOG_FILE_PREFIX)
        .join("logs");
    fs::create_dir_all(&path).map_err(|source| LoggingError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn ensure_file_exists(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn prune_old_logs(dir: &Path, max_files: usize) -> Result<(), LoggingError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|source| LoggingError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("log"))
        .map(|entry| {
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, entry.path())
        })
        .collect::<Vec<_>>();

    entries.sort_by_key(|(modified, _)| *modified);
    let excess = entries.len().saturating_sub(max_files);
    for (_, path) in entries.into_iter().take(excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(())
}

fn format_log_file_name<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{LOG_FILE_PREFIX}_{}.log",
        now.format("%Y-%m-%d_%H-%M-%S")
    )
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
