//! Configuration file management and API URL resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Built-in default, matching a locally running backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable overriding the config file's API URL.
pub const API_URL_ENV: &str = "DOCTRANS_API_URL";

/// The configuration file structure.
///
/// Corresponds to `~/.config/doctrans/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Base URL of the translation service API.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Default target language (ISO 639-1 code).
    #[serde(default)]
    pub to: Option<String>,
    /// Default source language; absent means auto-detect.
    #[serde(default)]
    pub from: Option<String>,
}

/// Loads and saves the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("doctrans");

        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }

    #[cfg(test)]
    const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Loads the config file, returning defaults if it does not exist.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }
}

/// Resolves the API base URL.
///
/// Priority (highest to lowest): CLI flag, `DOCTRANS_API_URL` environment
/// variable, config file, built-in default.
pub fn resolve_api_url(cli: Option<&str>, config: &ConfigFile) -> String {
    if let Some(url) = cli {
        return url.to_string();
    }
    if let Ok(url) = std::env::var(API_URL_ENV)
        && !url.is_empty()
    {
        return url;
    }
    config
        .api_url
        .clone()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
