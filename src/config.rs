//! User configuration, read from `<config_dir>/tattle/config.json`.
//!
//! Every section and field has a default, so a missing file or a partial one
//! is valid.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::services::{CaptureFormat, CaptureOptions};

/// Overrides [`ApiConfig::base_url`] when set.
pub const API_URL_ENV: &str = "TATTLE_API_URL";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The config file is not valid JSON for [`Config`].
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub feedbacks_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            feedbacks_path: "/feedbacks".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub format: CaptureFormat,
    pub quality: f32,
    /// Where screenshots are written; `None` means `<temp>/tattle`.
    pub directory: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            format: CaptureFormat::Png,
            quality: 0.8,
            directory: None,
        }
    }
}

impl CaptureConfig {
    pub fn options(&self) -> CaptureOptions {
        CaptureOptions {
            format: self.format,
            quality: self.quality,
        }
    }

    pub fn screenshot_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("tattle"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Put a space after the comma of the screenshot data URI, as the
    /// deployed backend expects.
    pub legacy_data_uri_space: bool,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            legacy_data_uri_space: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub capture: CaptureConfig,
    pub payload: PayloadConfig,
}

impl Config {
    /// Loads the config from the platform config directory, then applies
    /// [`API_URL_ENV`].
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&default_path()?)?;
        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Loads from `path`; a missing file yields [`Config::default`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces the API base URL with `value` when it is present and non-blank.
    pub fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }
}

/// Returns `<config_dir>/tattle/config.json`.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("tattle").join("config.json"))
}
