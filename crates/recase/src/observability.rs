//! Logging setup for the CLI.
//!
//! Two layers share one registry:
//! - stderr, quiet by default (warnings and errors), louder with `-v`
//! - an optional log file, enabled by `RECASE_LOG_PATH`, `RECASE_LOG_DIR`
//!   or `log_dir` in the config, filtered by the configured `log_level`
//!
//! `RUST_LOG` overrides both filters. Stdout is never written to, so the MCP
//! stdio transport stays clean.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "RECASE_LOG_PATH";
const LOG_DIR_ENV: &str = "RECASE_LOG_DIR";
const LOG_FILE_NAME: &str = "recase.log";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path (no rotation).
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated `recase.log` files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read log destinations from the environment, falling back to the
    /// config's `log_dir` when `RECASE_LOG_DIR` is unset.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let from_env = |key: &str| {
            std::env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            log_path: from_env(LOG_PATH_ENV),
            log_dir: from_env(LOG_DIR_ENV).or(config_log_dir),
        }
    }
}

/// Filter for the stderr layer.
pub fn console_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Filter for the file layer.
pub fn file_filter(config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    console_filter: EnvFilter,
    file_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_filter(console_filter);

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_NAME)));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_destinations_means_no_appender() {
        let config = ObservabilityConfig::default();
        assert!(file_appender(&config).unwrap().is_none());
    }

    #[test]
    fn log_dir_is_created() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("logs");
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(dir.clone()),
        };
        assert!(file_appender(&config).unwrap().is_some());
        assert!(dir.is_dir());
    }
}
