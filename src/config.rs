//! # Service Configuration
//!
//! Loaded from a JSON file; every field has a default, so a missing file
//! is a valid (if generation-less) configuration. `GOOGLE_API_KEY` in the
//! environment overrides `api_key`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::GeminiConfig;
use crate::http_server::HttpServerConfig;

/// Environment variable holding the generative API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Directory holding one JSON file per explanation
    #[serde(default = "default_explanations_dir")]
    pub explanations_dir: PathBuf,

    /// Generative model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for one generation call, in seconds; unbounded when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Public origin used in sitemap and robots links; the Host header is
    /// used when unset
    #[serde(default)]
    pub public_url: Option<String>,

    /// Generative API key (prefer the environment variable)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_explanations_dir() -> PathBuf {
    PathBuf::from("./explanations")
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            explanations_dir: default_explanations_dir(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
            public_url: None,
            api_key: None,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Load from `path` (defaults if it does not exist), then apply the
    /// environment override and validate
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Self::from_json(&content)?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = Some(key);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration JSON without touching the environment
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("request_timeout_secs must be > 0".into()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if let Some(url) = &self.public_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "public_url must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }
        Ok(())
    }

    /// Gateway settings derived from this configuration
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.api_base_url.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
