//! Client configuration management.
//!
//! Handles loading and saving the persisted configuration (account email and
//! API base URL) and merging it with environment overrides. The password is
//! never written to disk.
//!
//! Configuration is stored at `~/.config/frisquet/config.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_API_URL;
use crate::auth::credentials::EMAIL_ENV;

/// Application name used for the config directory path
const APP_NAME: &str = "frisquet";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "FRISQUET_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub email: Option<String>,
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply `FRISQUET_EMAIL` / `FRISQUET_API_URL` on top of the file values
    pub fn with_env_overrides(self) -> Self {
        self.merge(
            std::env::var(EMAIL_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
        )
    }

    fn merge(mut self, email: Option<String>, api_url: Option<String>) -> Self {
        if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
            self.email = Some(email);
        }
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
