//! Application configuration.
//!
//! Settings come from `warden.toml`; secrets come from the environment
//! (optionally via a `.env` file loaded by the binary).

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use warden_error::ConfigError;
use warden_social::WhoisConfig;

/// Database pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct DatabaseConfig {
    /// Maximum pooled connections
    pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { pool_size: 4 }
    }
}

/// Top-level configuration file.
///
/// Every section is optional:
///
/// ```toml
/// [database]
/// pool_size = 8
///
/// [whois]
/// tracked_guilds = [123456789012345678]
/// max_nicks = 6
/// info_nicks = 3
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct WardenConfig {
    /// Database pool settings
    database: DatabaseConfig,
    /// Presence and nickname tracking
    whois: WhoisConfig,
}

impl WardenConfig {
    /// Configuration file name searched for by [`WardenConfig::load`].
    pub const FILE_NAME: &'static str = "warden.toml";

    /// Parse configuration from TOML text.
    #[track_caller]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading configuration from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Places searched when no path is given, highest precedence first.
    ///
    /// 1. `./warden.toml`
    /// 2. `<config dir>/warden/warden.toml` (e.g. `~/.config/warden/warden.toml`)
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(Self::FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("warden").join(Self::FILE_NAME));
        }
        paths
    }

    /// Load from `path` if given, otherwise from the first file found in
    /// [`WardenConfig::search_paths`], otherwise defaults.
    ///
    /// An explicitly given path must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(found) => Self::from_file(found),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.pool_size == 0 {
            return Err(ConfigError::new("database.pool_size must be at least 1"));
        }
        if *self.whois.max_nicks() == 0 {
            return Err(ConfigError::new("whois.max_nicks must be at least 1"));
        }
        Ok(())
    }
}

/// Read the bot token from `DISCORD_TOKEN`.
pub fn discord_token() -> Result<String, ConfigError> {
    match std::env::var("DISCORD_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ConfigError::new(
            "DISCORD_TOKEN environment variable not set",
        )),
    }
}
