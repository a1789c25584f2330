//! Configuration management.
//!
//! Stores configuration in JSON format at `~/.killport/config.json`.
//! Environment variables override values read from disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::adapters::lsof::DEFAULT_LSOF;
use crate::error::{Error, Result};

/// Environment variable overriding [`Config::lsof_path`].
pub const LSOF_ENV_VAR: &str = "KILLPORT_LSOF";

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path or name of the lsof binary.
    #[serde(default = "default_lsof_path")]
    pub lsof_path: String,
}

fn default_lsof_path() -> String {
    DEFAULT_LSOF.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lsof_path: default_lsof_path(),
        }
    }
}

impl Config {
    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(LSOF_ENV_VAR).filter(|p| !p.trim().is_empty()) {
            self.lsof_path = path.trim().to_string();
        }
        self
    }
}

/// Configuration store for reading and writing settings.
///
/// Handles reading and writing configuration to `~/.killport/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.killport/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".killport").join("config.json");
        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &Config) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            fs::create_dir_all(config_dir)
                .await
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write to a temp file then rename so readers never see a partial file
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (ConfigStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lsof_path, "lsof");
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let config = Config {
            lsof_path: "/usr/sbin/lsof".to_string(),
        };
        store.save(&config).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"lsofPath\""));

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_missing_fields_use_defaults() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{}").unwrap();

        assert_eq!(store.load().await.unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ not json").unwrap();

        let err = tokio_test::block_on(store.load()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(|key| {
            (key == LSOF_ENV_VAR).then(|| " /opt/bin/lsof ".to_string())
        });
        assert_eq!(config.lsof_path, "/opt/bin/lsof");

        let config = Config::default().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.lsof_path, "lsof");

        let config = Config::default().with_overrides(|_| None);
        assert_eq!(config.lsof_path, "lsof");
    }
}
