//! Configuration for shoplist
//!
//! Resolution order for each setting (highest first):
//! 1. Explicit value from the caller (CLI flag)
//! 2. Environment (`DATABASE_URL`, `SHOPLIST_MAX_CONNECTIONS`), including
//!    anything loaded from `.env` files
//! 3. `~/.shoplist/config.toml`
//! 4. Built-in defaults

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;
use crate::error::{DbError, Result};

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS_ENV: &str = "SHOPLIST_MAX_CONNECTIONS";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoplistConfig {
    pub database_url: String,
    pub max_connections: u32,
}

/// On-disk config file (`~/.shoplist/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

/// Raw inputs before precedence is applied.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub cli_database_url: Option<String>,
    pub env_database_url: Option<String>,
    pub env_max_connections: Option<String>,
    pub file: ConfigFile,
}

impl ShoplistConfig {
    /// Load configuration from .env files, environment and config file.
    ///
    /// `database_url` overrides every other source when given.
    pub fn load(database_url: Option<String>) -> Result<Self> {
        load_dotenv();
        Self::load_from(database_url, config_path().as_deref())
    }

    /// Same as [`load`](Self::load) with an explicit config file path and
    /// without touching `.env` files.
    ///
    /// An unreadable or malformed config file is only fatal when it is the
    /// sole place a database URL could come from. Otherwise it is skipped
    /// with a warning.
    pub fn load_from(database_url: Option<String>, path: Option<&Path>) -> Result<Self> {
        let env_database_url = env::var(DATABASE_URL_ENV).ok();
        let url_supplied = database_url
            .iter()
            .chain(env_database_url.iter())
            .any(|url| !url.trim().is_empty());

        let file = match path.map(ConfigFile::read) {
            Some(Ok(file)) => file,
            Some(Err(err)) if url_supplied => {
                warn!("Ignoring config file: {}", err);
                ConfigFile::default()
            }
            Some(Err(err)) => return Err(err),
            None => ConfigFile::default(),
        };

        Self::resolve(ConfigSources {
            cli_database_url: database_url,
            env_database_url,
            env_max_connections: env::var(MAX_CONNECTIONS_ENV).ok(),
            file,
        })
    }

    /// Apply precedence to already-gathered sources.
    pub fn resolve(sources: ConfigSources) -> Result<Self> {
        let database_url = sources
            .cli_database_url
            .or(sources.env_database_url)
            .or(sources.file.database.url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                DbError::config(
                    "database URL not set. Use --database-url, the DATABASE_URL environment \
                     variable, or [database] url in ~/.shoplist/config.toml",
                )
            })?;

        let max_connections = match sources.env_max_connections {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                DbError::config(format!("{MAX_CONNECTIONS_ENV} must be a positive integer, got '{raw}'"))
            })?,
            None => sources
                .file
                .database
                .max_connections
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };

        if max_connections == 0 {
            return Err(DbError::config("max_connections must be at least 1"));
        }

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

impl ConfigFile {
    /// Read the config file; a missing file is an empty config.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DbError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            DbError::config(format!("invalid TOML in {}: {}", path.display(), e))
        })
    }
}

/// Get the shoplist config directory path (~/.shoplist)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".shoplist"))
}

/// Get the config file path (~/.shoplist/config.toml)
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load environment variables from .env files
///
/// Current directory first, then ~/.shoplist/.env. dotenvy never
/// overwrites variables that are already set.
pub fn load_dotenv() {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => {
                    debug!("Loaded .env from ~/.shoplist: {}", env_file.display());
                    loaded_from.push(env_file);
                }
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.shoplist)");
    } else {
        info!(files = loaded_from.len(), "Loaded .env configuration");
    }
}
