use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::HookConfig;

/// Env var holding an EnvFilter directive. Overrides `log_level` from config.
pub const LOG_ENV: &str = "ORCHESTRATION_HOOK_LOG";

/// Where log lines ended up
#[derive(Debug)]
pub enum LogSink {
    Off,
    Stderr,
    File(PathBuf),
}

/// Pick the filter directive: non-empty env value first, then config.
fn filter_directive(config: &HookConfig, env_value: Option<String>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.log_level.clone())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Install the global tracing subscriber.
///
/// Logging is off unless a filter is configured. Output never goes to
/// stdout, which belongs to the hook protocol. If the configured log file
/// can't be opened, logs go to stderr instead.
pub fn init_logging(config: &HookConfig) -> Result<LogSink> {
    let Some(directive) = filter_directive(config, std::env::var(LOG_ENV).ok()) else {
        return Ok(LogSink::Off);
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{}'", directive))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    let (file, file_error) = match config.log_file.as_deref().map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let sink = match file {
        Some(file) => {
            builder
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
            LogSink::File(config.log_file.clone().unwrap_or_default())
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
            LogSink::Stderr
        }
    };

    if let Some(e) = file_error {
        warn!(error = %format!("{:#}", e), "logging to stderr instead");
    }

    Ok(sink)
}
