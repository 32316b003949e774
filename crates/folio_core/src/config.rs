//! Host configuration loaded from `folio.toml`.
//!
//! # Invariants
//! - Every field has a default; an empty file is a valid configuration.
//! - `validate` runs on every load path before values are used.

use crate::logging::{LogLevel, LogSettings, LoggingError};
use crate::service::portfolio_service::{AppOptions, RESUME_PROJECT_LIMIT};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default configuration file name looked up by hosts.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Configuration for one folio host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding `projects.json`, `experience.json`, `education.json`.
    pub data_dir: PathBuf,
    /// SQLite file backing favorites and theme.
    pub store_path: PathBuf,
    pub contact_email: String,
    /// Host color-scheme preference when no theme is stored.
    pub prefers_dark: bool,
    pub resume_project_limit: usize,
    pub log_level: String,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            store_path: PathBuf::from("folio.sqlite3"),
            contact_email: "you@example.com".to_string(),
            prefers_dark: false,
            resume_project_limit: RESUME_PROJECT_LIMIT,
            log_level: LogLevel::build_default().as_str().to_string(),
            log_dir: None,
        }
    }
}

/// Configuration load or validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl AppConfig {
    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns validated defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".to_string()));
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "store_path must not be empty".to_string(),
            ));
        }
        let email = self.contact_email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(ConfigError::Invalid(format!(
                "contact_email `{email}` is not an email address"
            )));
        }
        LogLevel::parse(&self.log_level)?;
        Ok(())
    }

    /// Session options for `PortfolioApp`, stamped with the current year.
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            contact_email: self.contact_email.trim().to_string(),
            prefers_dark: self.prefers_dark,
            resume_project_limit: self.resume_project_limit,
            ..AppOptions::default()
        }
    }

    /// Logger settings, or `None` when file logging is disabled.
    pub fn log_settings(&self, mirror_to_stderr: bool) -> Result<Option<LogSettings>, ConfigError> {
        let Some(log_dir) = self.log_dir.clone() else {
            return Ok(None);
        };
        Ok(Some(LogSettings {
            level: LogLevel::parse(&self.log_level)?,
            log_dir,
            mirror_to_stderr,
        }))
    }
}
