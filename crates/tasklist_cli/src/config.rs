//! Runtime configuration resolution.
//!
//! Precedence: CLI flag > environment variable > defaults under the
//! platform data directory.

use crate::cli::Cli;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tasklist_core::default_log_level;

const APP_DIR_NAME: &str = "tasklist";
const DB_FILE_NAME: &str = "tasklist.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Absolute log directory.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let db_path = match &cli.db_path {
            Some(path) => path.clone(),
            None => app_data_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match &cli.log_dir {
            Some(path) => absolutize(path)?,
            None => app_data_dir()?.join(LOG_DIR_NAME),
        };
        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}

fn app_data_dir() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            CliError::Config("no platform data directory; pass --db and --log-dir".to_string())
        })
}

fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|err| CliError::Config(format!("cannot resolve `{}`: {err}", path.display())))
}
