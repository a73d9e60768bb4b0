//! Configuration file support
//!
//! Loads configuration from TOML file at ~/.config/signup/config.toml
//! Falls back to defaults if the file doesn't exist or can't be parsed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;

/// Configuration file path relative to home
const CONFIG_SUBDIR: &str = ".config/signup";
const CONFIG_FILE: &str = "config.toml";

/// Signup wizard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Where the completed form is posted
    pub endpoint: EndpointConfig,

    /// Presentation settings
    pub ui: UiConfig,
}

/// Submission endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL the form is POSTed to
    pub url: String,

    /// Timeout for the submission request (seconds)
    pub timeout_secs: u64,

    /// User agent sent with the request
    pub user_agent: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_ENDPOINT_URL.to_string(),
            timeout_secs: constants::HTTP_CLIENT_TIMEOUT_SECS,
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// UI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show submission failures on the review screen.
    /// Off by default: failures are only written to the log.
    pub show_submit_errors: bool,
}

impl SignupConfig {
    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Generate example configuration content
    pub fn example_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the configuration file path
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(CONFIG_SUBDIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from("/tmp/signup.toml"))
}
