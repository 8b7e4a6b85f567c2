//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::OwnerId;
use crate::index::SyncOptions;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "WIKIDEN_CONFIG";

/// Owner used when neither the CLI, the config file nor `$USER` provide one.
pub const FALLBACK_OWNER: &str = "local";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database file
    pub db: Option<PathBuf>,

    /// Default owner id
    pub owner: Option<String>,

    pub links: LinksConfig,
    pub storage: StorageConfig,
}

/// `[links]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Drop links from a note to itself
    pub exclude_self_links: bool,
}

/// `[storage]` table.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// How long a write waits for another process holding the lock
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/wikiden/config.toml`, overridden by `$WIKIDEN_CONFIG`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wikiden")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `<data_dir>/wikiden/notes.db`
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db.cloned().or_else(|| self.db.clone()).unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("wikiden")
                .join("notes.db")
        })
    }

    /// Resolve the owner.
    ///
    /// Precedence order:
    /// 1. CLI `--owner` argument
    /// 2. Config file `owner` setting
    /// 3. `$USER`
    /// 4. `"local"`
    pub fn owner(&self, cli_owner: Option<&str>) -> Result<OwnerId> {
        let raw = cli_owner
            .map(str::to_string)
            .or_else(|| self.owner.clone())
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| FALLBACK_OWNER.to_string());

        OwnerId::new(&raw).with_context(|| format!("invalid owner '{}'", raw))
    }

    /// Store options derived from the `[links]` and `[storage]` tables.
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            exclude_self_links: self.links.exclude_self_links,
            busy_timeout: Duration::from_millis(self.storage.busy_timeout_ms),
        }
    }
}
