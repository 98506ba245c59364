//! Application settings.
//!
//! Settings come from a TOML file (default `config.toml`, overridable with
//! `INVENTORY_CONFIG`). Every key is optional, and a missing file means all defaults.
//! `DATABASE_URL` in the environment takes precedence over the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";
const DEFAULT_IMPORT_PATH: &str = "inventory.csv";
const DEFAULT_BACKUP_PATH: &str = "backup.csv";

/// Where the inventory lives and which files it reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection url for the `SQLite` store
    pub database_url: String,
    /// CSV file imported on startup
    pub import_path: PathBuf,
    /// CSV file written by the backup command
    pub backup_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            import_path: PathBuf::from(DEFAULT_IMPORT_PATH),
            backup_path: PathBuf::from(DEFAULT_BACKUP_PATH),
        }
    }
}

impl AppConfig {
    /// Loads settings from the file named by `INVENTORY_CONFIG` (or `config.toml`),
    /// then applies the `DATABASE_URL` override.
    pub fn load() -> Result<Self> {
        let path = std::env::var("INVENTORY_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_from(&path)?;
        if let Ok(url) = std::env::var("DATABASE_URL") {
            debug!("DATABASE_URL overrides configured database url");
            config.database_url = url;
        }
        Ok(config)
    }

    /// Loads settings from a TOML file; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns `Error::Config` if the file exists but cannot be read or parsed.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read config file {}: {e}", path.display()),
        })?;
        Self::from_toml(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
