use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Why a `viewstate` config file was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in config '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Parsed, but a value is unusable (e.g. a bad log filter).
    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

impl Config {
    /// `<config dir>/viewstate/config.toml`, or `./viewstate/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("viewstate").join("config.toml")
    }

    /// Config from [`Config::config_path`]; defaults when that file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects a log filter that `EnvFilter` would not accept.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let filter = self.logging.filter.trim();
        if filter.is_empty() {
            return Err(ConfigError::Invalid {
                message: "logging.filter must not be empty".to_string(),
            });
        }

        EnvFilter::try_new(filter).map_err(|e| ConfigError::Invalid {
            message: format!("Invalid logging.filter '{}': {}", filter, e),
        })?;

        Ok(())
    }
}
