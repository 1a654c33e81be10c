use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::error::LookupError;

/// Placeholder shipped in the default config. Lookups refuse to run until
/// the operator replaces it with a real key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_OPENWEATHERMAP_API_KEY";

/// OpenWeatherMap current-conditions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Deploy-time configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Endpoint the lookup source talks to. Only changed in tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { api_key: default_api_key(), base_url: default_base_url() }
    }
}

impl Config {
    /// Returns the API key, rejecting an empty value and the placeholder
    /// default.
    pub fn credential(&self) -> Result<&str, LookupError> {
        let key = self.api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_API_KEY {
            return Err(LookupError::MissingCredential);
        }

        Ok(key)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }

    /// Load config from disk, or return the placeholder default if it
    /// doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return the default.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather-lookup")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
