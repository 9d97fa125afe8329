//! Runtime configuration read from the environment.

use std::path::PathBuf;

use maloka_observability::LogFormat;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "MALOKA_DATA_DIR";
pub const PRODUCTS_FILE_VAR: &str = "MALOKA_PRODUCTS_FILE";
pub const SALES_FILE_VAR: &str = "MALOKA_SALES_FILE";
pub const LOG_FORMAT_VAR: &str = "MALOKA_LOG_FORMAT";

pub const DEFAULT_PRODUCTS_FILE: &str = "products.json";
pub const DEFAULT_SALES_FILE: &str = "sales.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid MALOKA_LOG_FORMAT: {0}")]
    LogFormat(String),
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Where the stores live and how to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub products_path: PathBuf,
    pub sales_path: PathBuf,
    pub log_format: LogFormat,
}

impl DesktopConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Explicit file variables win over `MALOKA_DATA_DIR`; without either the
    /// stores live under the OS local data directory (`.../maloka`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(key)),
                other => Ok(other),
            }
        };

        let data_dir = match non_empty(DATA_DIR_VAR)? {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(),
        };

        let products_path = non_empty(PRODUCTS_FILE_VAR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DEFAULT_PRODUCTS_FILE));
        let sales_path = non_empty(SALES_FILE_VAR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DEFAULT_SALES_FILE));

        let log_format = match non_empty(LOG_FORMAT_VAR)? {
            Some(raw) => raw.parse().map_err(ConfigError::LogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            products_path,
            sales_path,
            log_format,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .map(|mut dir| {
            dir.push("maloka");
            dir
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
