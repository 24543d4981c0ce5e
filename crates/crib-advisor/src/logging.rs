use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Keeps the background writer alive; dropping it flushes the log file.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub log_path: PathBuf,
}

/// Installs the global subscriber. Structured logging writes JSON lines to
/// the configured file; otherwise warnings and errors go to stderr.
pub fn init_logging(logging: &LoggingConfig) -> Result<Option<LoggingGuard>> {
    let level = logging.level().unwrap_or(Level::INFO);

    if !logging.enable_structured {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(None);
    }

    let log_path = logging.log_path();
    if let Some(parent) = log_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory at {}", parent.display()))?;
    }
    let file = File::create(&log_path)
        .with_context(|| format!("creating log file at {}", log_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    // A subscriber may already be installed when running under tests.
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(LoggingGuard {
        _guard: guard,
        log_path,
    }))
}
