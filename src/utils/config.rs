// Configuration utilities and TOML parsing

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::{BuildverError, Result};

/// Project-local configuration file name
pub const CONFIG_FILE_NAME: &str = "buildver.toml";

/// Output style for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from buildver.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File `buildver show` reads the version from
    pub version_file: PathBuf,
    pub output: OutputFormat,
    /// Label in front of the startup version line
    pub log_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from("version.txt"),
            output: OutputFormat::Text,
            log_prefix: "Running version".to_string(),
        }
    }
}

/// Configuration parsing and lookup
pub struct ConfigParser;

impl ConfigParser {
    /// Resolve configuration.
    ///
    /// An explicit path must exist. Otherwise `./buildver.toml` is tried,
    /// then the user config directory, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let candidates = [
            Some(PathBuf::from(CONFIG_FILE_NAME)),
            Self::user_config_path(),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Self::load_file(&path);
            }
        }

        log::debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Load and parse a single configuration file.
    ///
    /// A relative `version_file` is resolved against the file's directory.
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(BuildverError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            BuildverError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;

        log::debug!("loaded configuration from {}", path.display());
        let mut config = Self::parse_config(&content)?;

        // relative paths are relative to the config file, not the cwd
        if config.version_file.is_relative() {
            if let Some(dir) = path.parent() {
                config.version_file = dir.join(&config.version_file);
            }
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)
            .map_err(|e| BuildverError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        if config.version_file.as_os_str().is_empty() {
            return Err(BuildverError::ConfigError(
                "version_file cannot be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// `<config dir>/buildver/config.toml`, when the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("buildver").join("config.toml"))
    }
}
