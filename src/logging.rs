//! File-backed logging.
//!
//! The game owns the terminal (raw mode, alternate screen), so log output
//! goes to a file instead of stderr. Nothing is logged unless `--log-file`
//! is given or `RUST_LOG` is set.

use crate::build_info::version_line;
use crate::config::Config;
use anyhow::Context;
use env_logger::{Builder, Env, Target};
use std::ffi::OsStr;
use std::fs::File;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "flappy.log";

/// Where logs should go, if anywhere.
pub fn log_target(config: &Config, rust_log: Option<&OsStr>) -> Option<PathBuf> {
    match (&config.log_file, rust_log) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(_)) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
        (None, None) => None,
    }
}

/// Install the global logger. Returns the log path when logging is enabled.
pub fn init(config: &Config) -> anyhow::Result<Option<PathBuf>> {
    let rust_log = std::env::var_os("RUST_LOG");
    let Some(path) = log_target(config, rust_log.as_deref()) else {
        return Ok(None);
    };

    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;

    log::info!("{} starting", version_line());
    Ok(Some(path))
}
