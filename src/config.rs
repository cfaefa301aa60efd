//! Adrep Configuration Module
//!
//! Manages persistent configuration for the backend origin.
//! Config is stored in `~/.config/adrep/config.toml`.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flag (`--backend`)
//! 2. Environment variable (`ADREP_BACKEND_URL`)
//! 3. Config file (`~/.config/adrep/config.toml`)
//! 4. Default (`http://127.0.0.1:8000`)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AdrepError, Result};

/// Default backend origin (the reference backend listens here).
pub const DEFAULT_BACKEND: &str = "http://127.0.0.1:8000";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdrepConfig {
    /// Backend origin, e.g. `http://127.0.0.1:8000`
    pub backend: Option<String>,
}

impl AdrepConfig {
    /// Get the config directory path
    ///
    /// Returns `~/.config/adrep/` on Unix, `%APPDATA%/adrep/` on Windows
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("adrep")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AdrepError::ConfigError {
            reason: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| AdrepError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Save configuration to file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir();
        let path = Self::config_path();

        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| AdrepError::ConfigError {
                reason: format!("Failed to create config directory: {}", e),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| AdrepError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| AdrepError::ConfigError {
            reason: format!("Failed to write config file: {}", e),
        })?;

        Ok(())
    }

    /// Merge with environment variables
    ///
    /// `ADREP_BACKEND_URL` takes precedence over the config file value.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("ADREP_BACKEND_URL") {
            if !url.is_empty() {
                self.backend = Some(url);
            }
        }
        self
    }

    /// Effective backend origin, with the CLI flag applied on top and the
    /// trailing slash normalized away (paths are joined with a leading `/`).
    pub fn backend_origin(&self, cli_override: Option<&str>) -> String {
        let origin = cli_override
            .or(self.backend.as_deref())
            .unwrap_or(DEFAULT_BACKEND);
        origin.trim_end_matches('/').to_string()
    }
}
